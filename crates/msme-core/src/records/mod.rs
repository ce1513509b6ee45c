//! Typed record stores for a business session: inventory, contacts, orders.
//!
//! All records live in an explicit [`AppState`] owned by the session and
//! passed to command handlers; there is no ambient global state.

pub mod contact;
pub mod ids;
pub mod order;
pub mod product;
pub mod state;

pub use contact::{Customer, NewContact, Supplier};
pub use order::{LineRequest, OrderLine, PurchaseOrder, SalesOrder};
pub use product::{NewProduct, Product};
pub use state::AppState;

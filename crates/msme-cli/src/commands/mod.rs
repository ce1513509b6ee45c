pub mod amortize;
pub mod contacts;
pub mod dashboard;
pub mod inventory;
pub mod orders;

use clap::Args;

/// A single record identifier argument.
#[derive(Args)]
pub struct IdArg {
    /// Record identifier (e.g. PROD001, CUST001, SO001)
    pub id: String,
}

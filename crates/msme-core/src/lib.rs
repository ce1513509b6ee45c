pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "records")]
pub mod records;

#[cfg(feature = "dashboard")]
pub mod dashboard;

#[cfg(feature = "persistence")]
pub mod persistence;

pub use error::MsmeError;
pub use types::*;

/// Standard result type for all msme-core operations
pub type MsmeResult<T> = Result<T, MsmeError>;

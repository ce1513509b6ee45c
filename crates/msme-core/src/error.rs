use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsmeError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-amortizing loan: monthly payment {payment} does not cover first-period interest {first_interest}")]
    NonAmortizing {
        payment: Decimal,
        first_interest: Decimal,
    },

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MsmeError {
    fn from(e: serde_json::Error) -> Self {
        MsmeError::SerializationError(e.to_string())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::MsmeError;
use crate::MsmeResult;

/// A customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A supplier record. Same contact shape as [`Customer`] but kept as its own
/// type so supplier ids cannot be handed to customer operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Contact fields for a customer or supplier about to be added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl NewContact {
    pub(crate) fn validate(&self) -> MsmeResult<()> {
        if self.name.trim().is_empty() {
            return Err(MsmeError::InvalidInput {
                field: "name".into(),
                reason: "Name is required".into(),
            });
        }
        Ok(())
    }
}

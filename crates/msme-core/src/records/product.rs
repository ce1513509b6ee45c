use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MsmeError;
use crate::types::Money;
use crate::MsmeResult;

/// A stocked product in the inventory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unit_price: Money,
    pub stock: u32,
    /// Threshold below which the product is flagged for restocking.
    pub reorder_level: u32,
}

impl Product {
    /// Stock has fallen below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.reorder_level
    }
}

/// Fields for a product about to be added; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit_price: Money,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub reorder_level: u32,
}

impl NewProduct {
    pub(crate) fn validate(&self) -> MsmeResult<()> {
        if self.name.trim().is_empty() {
            return Err(MsmeError::InvalidInput {
                field: "name".into(),
                reason: "Product name is required".into(),
            });
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(MsmeError::InvalidInput {
                field: "unit_price".into(),
                reason: "Unit price must be positive".into(),
            });
        }
        Ok(())
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// A requested line item: what the caller asks for before pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// A priced line item as recorded on an order. Prices are captured at order
/// time, so later product edits do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

/// A confirmed sales order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total_amount: Money,
}

/// A confirmed purchase order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub date: NaiveDate,
    pub supplier_id: String,
    pub supplier_name: String,
    pub lines: Vec<OrderLine>,
    pub total_amount: Money,
}

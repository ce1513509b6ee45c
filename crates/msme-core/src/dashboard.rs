//! Dashboard aggregation over a session's record stores.
//!
//! Pure read-only derivations: key metrics, low-stock flags, the sales trend
//! point series consumed by an external charting layer, and the canned
//! business-stage advice keyed on total sales value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::records::AppState;
use crate::types::Money;

/// Coarse business stage, selected by total sales value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessStage {
    Idle,
    Startup,
    Growing,
    Established,
}

impl BusinessStage {
    /// Threshold lookup: no sales yet is Idle, under 1 lakh is Startup,
    /// under 10 lakh is Growing, anything above is Established.
    pub fn from_total_sales(total: Money) -> Self {
        if total <= Decimal::ZERO {
            BusinessStage::Idle
        } else if total < dec!(100_000) {
            BusinessStage::Startup
        } else if total < dec!(1_000_000) {
            BusinessStage::Growing
        } else {
            BusinessStage::Established
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BusinessStage::Idle => {
                "No sales recorded yet. Add products and record your first sale to get started."
            }
            BusinessStage::Startup => {
                "Early days. Focus on repeat customers and keep reorder levels conservative."
            }
            BusinessStage::Growing => {
                "Sales are building. Review supplier terms and watch low-stock items closely."
            }
            BusinessStage::Established => {
                "Established volume. Consider negotiating bulk purchase pricing and tracking margins per product."
            }
        }
    }
}

/// A product flagged for restocking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product_id: String,
    pub name: String,
    pub stock: u32,
    pub reorder_level: u32,
}

/// One point of the sales trend series: `(date, total sales that day)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total: Money,
}

/// Key metrics shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_customers: usize,
    pub total_suppliers: usize,
    pub sales_order_count: usize,
    pub purchase_order_count: usize,
    pub total_sales_value: Money,
    pub total_purchase_value: Money,
    pub low_stock: Vec<LowStockItem>,
    pub business_stage: BusinessStage,
    pub advice: String,
}

/// Aggregate the session state into the dashboard metrics.
pub fn summarize(state: &AppState) -> DashboardSummary {
    let total_sales_value: Money = state.sales_orders().iter().map(|o| o.total_amount).sum();
    let total_purchase_value: Money = state.purchase_orders().iter().map(|o| o.total_amount).sum();

    let low_stock = state
        .low_stock_products()
        .into_iter()
        .map(|p| LowStockItem {
            product_id: p.id.clone(),
            name: p.name.clone(),
            stock: p.stock,
            reorder_level: p.reorder_level,
        })
        .collect();

    let business_stage = BusinessStage::from_total_sales(total_sales_value);

    DashboardSummary {
        total_products: state.products().count(),
        total_customers: state.customers().count(),
        total_suppliers: state.suppliers().count(),
        sales_order_count: state.sales_orders().len(),
        purchase_order_count: state.purchase_orders().len(),
        total_sales_value,
        total_purchase_value,
        low_stock,
        business_stage,
        advice: business_stage.advice().to_string(),
    }
}

/// Sales totals grouped by order date, ascending. This is the `(x, y)` series
/// handed to the external charting collaborator.
pub fn sales_trend(state: &AppState) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for order in state.sales_orders() {
        *by_date.entry(order.date).or_insert(Decimal::ZERO) += order.total_amount;
    }
    by_date
        .into_iter()
        .map(|(date, total)| TrendPoint { date, total })
        .collect()
}

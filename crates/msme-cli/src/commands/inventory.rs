use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use msme_core::records::{AppState, NewProduct, Product};
use msme_core::types::format_money;

use super::IdArg;
use crate::input;

/// Arguments for adding a product
#[derive(Args)]
pub struct AddProductArgs {
    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Free-text description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Unit price in currency units
    #[arg(long)]
    pub unit_price: Option<Decimal>,

    /// Initial stock quantity
    #[arg(long, default_value = "0")]
    pub stock: u32,

    /// Stock level below which the product is flagged for restocking
    #[arg(long, default_value = "0")]
    pub reorder_level: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_add(
    state: &mut AppState,
    args: &AddProductArgs,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let new: NewProduct = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        NewProduct {
            name: args
                .name
                .clone()
                .ok_or("--name is required (or provide --input)")?,
            description: args.description.clone(),
            unit_price: args
                .unit_price
                .ok_or("--unit-price is required (or provide --input)")?,
            stock: args.stock,
            reorder_level: args.reorder_level,
        }
    };

    let product = state.add_product(new)?;
    Ok((serde_json::to_value(product)?, true))
}

pub fn run_list(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let rows: Vec<Value> = state.products().map(product_row).collect();
    Ok((Value::Array(rows), false))
}

pub fn run_get(state: &AppState, arg: &IdArg) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let product = state.product(&arg.id)?;
    Ok((product_row(product), false))
}

/// One display row per product, with the price pre-formatted and the same
/// stock-status column the dashboard uses.
fn product_row(product: &Product) -> Value {
    json!({
        "id": product.id,
        "name": product.name,
        "description": product.description,
        "unit_price": format_money(product.unit_price),
        "stock": product.stock,
        "reorder_level": product.reorder_level,
        "stock_status": if product.is_low_stock() { "Low Stock" } else { "OK" },
    })
}

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};

use msme_core::records::{AppState, LineRequest, PurchaseOrder, SalesOrder};
use msme_core::types::format_money;

use super::IdArg;
use crate::input;

/// Arguments for creating a sales order
#[derive(Args)]
pub struct CreateSaleArgs {
    /// Customer id (e.g. CUST001)
    #[arg(long)]
    pub customer: Option<String>,

    /// Order date; defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Line item as PRODID:QTY (repeatable, e.g. --line PROD001:2)
    #[arg(long = "line")]
    pub lines: Vec<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for creating a purchase order
#[derive(Args)]
pub struct CreatePurchaseArgs {
    /// Supplier id (e.g. SUPP001)
    #[arg(long)]
    pub supplier: Option<String>,

    /// Order date; defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Line item as PRODID:QTY (repeatable, e.g. --line PROD001:10)
    #[arg(long = "line")]
    pub lines: Vec<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// JSON shape accepted via --input or stdin for either order kind.
#[derive(Deserialize)]
struct OrderRequest {
    /// Customer id for sales, supplier id for purchases.
    party_id: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    lines: Vec<LineRequest>,
}

pub fn run_create_sale(
    state: &mut AppState,
    args: &CreateSaleArgs,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let request = resolve_request(
        &args.input,
        &args.customer,
        args.date,
        &args.lines,
        "--customer",
    )?;
    let date = request.date.unwrap_or_else(today);
    let order = state.create_sales_order(&request.party_id, date, &request.lines)?;
    Ok((serde_json::to_value(order)?, true))
}

pub fn run_create_purchase(
    state: &mut AppState,
    args: &CreatePurchaseArgs,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let request = resolve_request(
        &args.input,
        &args.supplier,
        args.date,
        &args.lines,
        "--supplier",
    )?;
    let date = request.date.unwrap_or_else(today);
    let order = state.create_purchase_order(&request.party_id, date, &request.lines)?;
    Ok((serde_json::to_value(order)?, true))
}

pub fn run_sales(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let rows: Vec<Value> = state.sales_orders().iter().map(sales_row).collect();
    Ok((Value::Array(rows), false))
}

pub fn run_sale(state: &AppState, arg: &IdArg) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    Ok((serde_json::to_value(state.sales_order(&arg.id)?)?, false))
}

pub fn run_purchases(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let rows: Vec<Value> = state.purchase_orders().iter().map(purchase_row).collect();
    Ok((Value::Array(rows), false))
}

pub fn run_purchase(
    state: &AppState,
    arg: &IdArg,
) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    Ok((serde_json::to_value(state.purchase_order(&arg.id)?)?, false))
}

fn resolve_request(
    input_path: &Option<String>,
    party: &Option<String>,
    date: Option<NaiveDate>,
    lines: &[String],
    party_flag: &str,
) -> Result<OrderRequest, Box<dyn std::error::Error>> {
    if let Some(path) = input_path {
        return Ok(input::file::read_json(path)?);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(OrderRequest {
        party_id: party
            .clone()
            .ok_or_else(|| format!("{party_flag} is required (or provide --input)"))?,
        date,
        lines: lines
            .iter()
            .map(|spec| parse_line(spec))
            .collect::<Result<Vec<_>, _>>()?,
    })
}

/// Parse a `PRODID:QTY` line specification.
fn parse_line(spec: &str) -> Result<LineRequest, Box<dyn std::error::Error>> {
    let (product_id, quantity) = spec
        .split_once(':')
        .ok_or_else(|| format!("Invalid line '{spec}': expected PRODID:QTY"))?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| format!("Invalid quantity in line '{spec}'"))?;
    Ok(LineRequest {
        product_id: product_id.to_string(),
        quantity,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// List rows flatten the nested line items to a count, the way the order
// tables are shown; `sale <ID>` prints the full record.
fn sales_row(order: &SalesOrder) -> Value {
    json!({
        "id": order.id,
        "date": order.date,
        "customer_id": order.customer_id,
        "customer_name": order.customer_name,
        "line_count": order.lines.len(),
        "total_amount": format_money(order.total_amount),
    })
}

fn purchase_row(order: &PurchaseOrder) -> Value {
    json!({
        "id": order.id,
        "date": order.date,
        "supplier_id": order.supplier_id,
        "supplier_name": order.supplier_name,
        "line_count": order.lines.len(),
        "total_amount": format_money(order.total_amount),
    })
}

use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use msme_core::records::{AppState, LineRequest};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let terms: msme_core::amortization::LoanTerms =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = msme_core::amortization::build_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Order creation request for either order kind: the customer or supplier id
/// plus requested line items. Date defaults to today when omitted.
#[derive(Deserialize)]
struct OrderRequest {
    party_id: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    lines: Vec<LineRequest>,
}

fn order_date(request: &OrderRequest) -> NaiveDate {
    request
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[napi]
pub fn create_sales_order(state_json: String, request_json: String) -> NapiResult<String> {
    let mut state: AppState = serde_json::from_str(&state_json).map_err(to_napi_error)?;
    let request: OrderRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let order = state
        .create_sales_order(&request.party_id, order_date(&request), &request.lines)
        .map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "state": state, "order": order }))
        .map_err(to_napi_error)
}

#[napi]
pub fn create_purchase_order(state_json: String, request_json: String) -> NapiResult<String> {
    let mut state: AppState = serde_json::from_str(&state_json).map_err(to_napi_error)?;
    let request: OrderRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let order = state
        .create_purchase_order(&request.party_id, order_date(&request), &request.lines)
        .map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({ "state": state, "order": order }))
        .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[napi]
pub fn dashboard_summary(state_json: String) -> NapiResult<String> {
    let state: AppState = serde_json::from_str(&state_json).map_err(to_napi_error)?;
    let summary = msme_core::dashboard::summarize(&state);
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[napi]
pub fn sales_trend(state_json: String) -> NapiResult<String> {
    let state: AppState = serde_json::from_str(&state_json).map_err(to_napi_error)?;
    let trend = msme_core::dashboard::sales_trend(&state);
    serde_json::to_string(&trend).map_err(to_napi_error)
}

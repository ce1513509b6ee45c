use serde_json::Value;

use msme_core::dashboard;
use msme_core::records::AppState;

pub fn run_summary(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let summary = dashboard::summarize(state);
    Ok((serde_json::to_value(summary)?, false))
}

pub fn run_trend(state: &AppState) -> Result<(Value, bool), Box<dyn std::error::Error>> {
    let trend = dashboard::sales_trend(state);
    Ok((serde_json::to_value(trend)?, false))
}

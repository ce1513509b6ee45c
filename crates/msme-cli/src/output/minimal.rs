use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Unwrap the computation envelope if present; the amortization summary is
    // the interesting part of that output.
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .map(|r| {
            r.as_object()
                .and_then(|m| m.get("summary"))
                .unwrap_or(r)
        })
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "total_monthly_payment",
        "payment_count",
        "total_sales_value",
        "business_stage",
        "total_amount",
        "id",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

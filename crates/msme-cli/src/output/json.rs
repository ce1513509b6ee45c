use serde_json::Value;

/// Pretty-print the command result as JSON, the default output format.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Could not render result as JSON: {e}"),
    }
}

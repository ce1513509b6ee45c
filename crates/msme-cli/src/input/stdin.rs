use serde_json::Value;
use std::io::{self, Read};

/// Read JSON from stdin when a front-end or script pipes it in.
/// Returns None on an interactive TTY so flag parsing takes over.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| format!("Invalid JSON on stdin: {e}"))?;
    Ok(Some(value))
}

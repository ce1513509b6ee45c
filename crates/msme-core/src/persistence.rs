//! Per-user JSON blob persistence for the session state.
//!
//! One file per user under a data directory. Loading never fails the session:
//! a missing or malformed blob degrades to the empty default state. Saving
//! reports `PersistenceUnavailable` so the caller can warn the user and keep
//! working in memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MsmeError;
use crate::records::AppState;
use crate::MsmeResult;

/// Restrict user names so the blob path cannot escape the data directory.
pub fn validate_user(user: &str) -> MsmeResult<()> {
    let valid = !user.is_empty()
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(MsmeError::InvalidInput {
            field: "user".into(),
            reason: "User names may only contain letters, digits, '-' and '_'".into(),
        });
    }
    Ok(())
}

fn blob_path(data_dir: &Path, user: &str) -> PathBuf {
    data_dir.join(format!("{user}.json"))
}

/// Load a user's session state. A missing or unreadable blob yields the
/// empty default state rather than an error.
pub fn load(data_dir: &Path, user: &str) -> MsmeResult<AppState> {
    validate_user(user)?;
    let contents = match fs::read_to_string(blob_path(data_dir, user)) {
        Ok(contents) => contents,
        Err(_) => return Ok(AppState::default()),
    };
    Ok(serde_json::from_str(&contents).unwrap_or_default())
}

/// Save a user's session state, creating the data directory if needed.
pub fn save(data_dir: &Path, user: &str, state: &AppState) -> MsmeResult<()> {
    validate_user(user)?;
    fs::create_dir_all(data_dir).map_err(|e| {
        MsmeError::PersistenceUnavailable(format!(
            "Cannot create {}: {e}",
            data_dir.display()
        ))
    })?;
    let path = blob_path(data_dir, user);
    let json = serde_json::to_string_pretty(state)?;
    fs::write(&path, json)
        .map_err(|e| MsmeError::PersistenceUnavailable(format!("Cannot write {}: {e}", path.display())))
}

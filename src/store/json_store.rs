//! Whole-file JSON persistence shared by the directory and the ledger.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// Read and parse `path`.
///
/// - file missing → `Ok(None)`
/// - empty file → `Ok(None)`
/// - unparsable → `Err(AppError::Json)`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&content)?))
}

/// Serialize `value` pretty-printed, replacing the whole file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    ensure_parent_dir(path)?;
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

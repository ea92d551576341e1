//! Record loading for in-memory filtering.
//!
//! Accepts either a JSON array of objects or JSON Lines (one value per
//! line, blank lines ignored).

use crate::core::error::{Result, TermsiftError};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load records from a file, or from stdin when `path` is `-`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            TermsiftError::InvalidRecord(format!("Failed to read {}: {e}", path.display()))
        })?
    };

    let records = parse_records(&contents)?;
    tracing::debug!("Loaded {} record(s) from {:?}", records.len(), path);
    Ok(records)
}

/// Parse a JSON array or JSON Lines document.
pub fn parse_records(contents: &str) -> Result<Vec<Value>> {
    let trimmed = contents.trim_start();

    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed)
            .map_err(|e| TermsiftError::InvalidRecord(format!("JSON array: {e}")))?;
        return match value {
            Value::Array(items) => Ok(items),
            _ => Err(TermsiftError::InvalidRecord(
                "expected a JSON array".to_string(),
            )),
        };
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .map_err(|e| TermsiftError::InvalidRecord(format!("line {}: {e}", idx + 1)))
        })
        .collect()
}

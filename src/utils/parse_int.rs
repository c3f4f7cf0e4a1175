use crate::error::{InventoryError, Result};

/// Parse an optional integer from a string. Missing or blank values yield `None`.
pub fn parse_optional_int(value: Option<&String>, field: &str) -> Result<Option<i64>> {
    let Some(v) = value else {
        return Ok(None);
    };
    let t = v.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<i64>()
        .map(Some)
        .map_err(|_| InventoryError::Validation(format!("{} must be an integer, got '{}'", field, t)))
}

/// Like [`parse_optional_int`] but rejects zero and negative values.
pub fn parse_optional_id(value: Option<&String>, field: &str) -> Result<Option<i64>> {
    match parse_optional_int(value, field)? {
        Some(id) if id < 1 => Err(InventoryError::Validation(format!(
            "{} must be a positive integer, got {}",
            field, id
        ))),
        other => Ok(other),
    }
}

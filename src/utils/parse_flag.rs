use crate::error::{InventoryError, Result};

/// Parse a tri-state boolean: missing or blank yields `None`.
pub fn parse_optional_flag(value: Option<&String>, field: &str) -> Result<Option<bool>> {
    let Some(v) = value else {
        return Ok(None);
    };
    let t = v.trim().to_lowercase();
    match t.as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(InventoryError::Validation(format!(
            "{} must be a boolean (true/false), got '{}'",
            field,
            v.trim()
        ))),
    }
}

/// Parse a boolean flag from an optional string value
pub fn parse_flag(value: Option<&String>, field: &str, default: bool) -> Result<bool> {
    Ok(parse_optional_flag(value, field)?.unwrap_or(default))
}

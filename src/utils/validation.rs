use crate::utils::error::{FormatError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_route(field_name: &str, route: &str) -> Result<()> {
    validate_non_empty_string(field_name, route)?;

    if !route.starts_with('/') {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route must start with '/'".to_string(),
        });
    }

    if route.chars().any(char::is_whitespace) {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Parses the boolean spellings accepted in environment variables.
pub fn parse_bool_flag(field_name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected one of: true, false, 1, 0".to_string(),
        }),
    }
}

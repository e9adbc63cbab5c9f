use crate::utils::error::{RemapError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RemapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RemapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RemapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Both inputs cannot come from stdin in the same run.
pub fn validate_single_stdin(request_path: &str, mapping_path: &str) -> Result<()> {
    if request_path == "-" && mapping_path == "-" {
        return Err(RemapError::InvalidConfigValueError {
            field: "mapping".to_string(),
            value: mapping_path.to_string(),
            reason: "Only one input can be read from stdin".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("request", "data/request.json").is_ok());
        assert!(validate_path("request", "-").is_ok());
        assert!(validate_path("request", "").is_err());
        assert!(validate_path("request", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("base_path", ".").is_ok());
        assert!(validate_non_empty_string("base_path", "   ").is_err());
    }

    #[test]
    fn test_validate_single_stdin() {
        assert!(validate_single_stdin("-", "mapping.json").is_ok());
        assert!(validate_single_stdin("-", "-").is_err());
    }
}

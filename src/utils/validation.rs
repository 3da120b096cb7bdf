use crate::utils::error::{LauncherError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_context_path(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.starts_with('/') {
        return Err(LauncherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path must start with '/'".to_string(),
        });
    }

    if path.ends_with('/') {
        return Err(LauncherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path must not end with '/'".to_string(),
        });
    }

    if path.chars().any(|c| c.is_whitespace()) {
        return Err(LauncherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Context path must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LauncherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LauncherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

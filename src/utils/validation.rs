use crate::utils::error::{BenchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unexpected file extension: {}. Expected: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

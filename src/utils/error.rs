use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read template '{}': {source}", .path.display())]
    TemplateReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("MJML parse error: {message}")]
    ParseError { message: String },

    #[error("MJML render error: {message}")]
    RenderError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Conversion,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BenchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BenchError::IoError(_) | BenchError::TemplateReadError { .. } => ErrorCategory::Io,
            BenchError::ParseError { .. } | BenchError::RenderError { .. } => {
                ErrorCategory::Conversion
            }
            BenchError::SerializationError(_) => ErrorCategory::Serialization,
            BenchError::ConfigError { .. }
            | BenchError::ConfigValidationError { .. }
            | BenchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Conversion => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BenchError::TemplateReadError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Template not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading template: {}", path.display())
                }
                _ => format!("Could not read template {}: {}", path.display(), source),
            },
            BenchError::ParseError { message } => {
                format!("The template could not be parsed as MJML: {}", message)
            }
            BenchError::RenderError { message } => {
                format!("The template could not be rendered to HTML: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BenchError::IoError(_) | BenchError::TemplateReadError { .. } => {
                "Check that the path exists and points to a readable .mjml file"
            }
            BenchError::ParseError { .. } => {
                "Make sure the template starts with an <mjml> root element"
            }
            BenchError::RenderError { .. } => {
                "Simplify the template until the failing component is isolated"
            }
            BenchError::SerializationError(_) => "Retry with --format text",
            BenchError::ConfigError { .. } | BenchError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the config file"
            }
            BenchError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

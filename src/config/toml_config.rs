use crate::domain::model::ReportFormat;
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub bench: BenchSection,
    #[serde(default)]
    pub render: RenderSettings,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchSection {
    pub input: Option<PathBuf>,
    pub iterations: Option<usize>,
    pub warmup: Option<usize>,
    pub label: Option<String>,
    pub format: Option<String>,
}

/// Options forwarded to the mrml renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    pub disable_comments: Option<bool>,
    pub social_icon_origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// Loads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BenchError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses config text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BenchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Undefined variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BenchError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(input) = &self.bench.input {
            validate_path("bench.input", input)?;
        }

        if let Some(iterations) = self.bench.iterations {
            validate_positive_number("bench.iterations", iterations, 1)?;
        }

        if let Some(label) = &self.bench.label {
            validate_non_empty_string("bench.label", label)?;
        }

        if let Some(format) = &self.bench.format {
            validate_one_of("bench.format", &format.to_ascii_lowercase(), &ReportFormat::VALUES)?;
        }

        if let Some(level) = self.log_level() {
            validate_one_of("monitoring.log_level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn report_format(&self) -> Result<Option<ReportFormat>> {
        self.bench.format.as_deref().map(str::parse).transpose()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

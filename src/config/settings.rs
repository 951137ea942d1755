use crate::config::toml_config::{RenderSettings, TomlConfig};
use crate::domain::model::ReportFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_positive_number, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_LABEL: &str = "mjml";

/// Effective settings for one run, after layering flags over the config file.
#[derive(Debug, Clone)]
pub struct BenchSettings {
    pub input: Option<PathBuf>,
    pub iterations: usize,
    pub warmup: usize,
    pub label: String,
    pub format: ReportFormat,
    pub monitor: bool,
    pub log_level: Option<String>,
    pub render: RenderSettings,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            input: None,
            iterations: DEFAULT_ITERATIONS,
            warmup: 0,
            label: DEFAULT_LABEL.to_string(),
            format: ReportFormat::Text,
            monitor: false,
            log_level: None,
            render: RenderSettings::default(),
        }
    }
}

impl BenchSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            input: config.bench.input.clone(),
            iterations: config.bench.iterations.unwrap_or(defaults.iterations),
            warmup: config.bench.warmup.unwrap_or(defaults.warmup),
            label: config.bench.label.clone().unwrap_or(defaults.label),
            format: config.report_format()?.unwrap_or(defaults.format),
            monitor: config.monitoring_enabled(),
            log_level: config.log_level().map(str::to_string),
            render: config.render.clone(),
        })
    }
}

impl ConfigProvider for BenchSettings {
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn warmup(&self) -> usize {
        self.warmup
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn format(&self) -> ReportFormat {
        self.format
    }
}

impl Validate for BenchSettings {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        validate_positive_number("iterations", self.iterations, 1)?;
        validate_non_empty_string("label", &self.label)?;
        Ok(())
    }
}

use crate::config::settings::BenchSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mjml-bench")]
#[command(about = "Time repeated MJML to HTML conversions of a single template")]
#[command(version)]
pub struct CliConfig {
    /// Path to the .mjml template to convert
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of timed conversions [default: 100]
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Untimed conversions to run before the timed loop [default: 0]
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Label printed in front of the elapsed time [default: mjml]
    #[arg(long)]
    pub label: Option<String>,

    /// Report format: text or json [default: text]
    #[arg(long)]
    pub format: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log CPU and memory usage around the timed loop
    #[arg(long)]
    pub monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    /// Flags win over the config file, which wins over built-in defaults.
    pub fn merge(&self, file: Option<&TomlConfig>) -> Result<BenchSettings> {
        let mut settings = match file {
            Some(config) => BenchSettings::from_toml(config)?,
            None => BenchSettings::default(),
        };

        if let Some(input) = &self.input {
            settings.input = Some(input.clone());
        }
        if let Some(iterations) = self.iterations {
            settings.iterations = iterations;
        }
        if let Some(warmup) = self.warmup {
            settings.warmup = warmup;
        }
        if let Some(label) = &self.label {
            settings.label = label.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.parse()?;
        }
        settings.monitor |= self.monitor;

        Ok(settings)
    }

    pub fn to_settings(&self) -> Result<BenchSettings> {
        let file = self.load_file_config()?;
        let settings = self.merge(file.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }
}

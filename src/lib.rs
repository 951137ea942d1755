pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FsTemplateSource, MrmlConverter};
pub use config::{BenchSettings, TomlConfig};
pub use core::bench::BenchEngine;
pub use domain::model::{BenchReport, ReportFormat, Template};
pub use domain::ports::{ConfigProvider, Converter, TemplateSource};
pub use utils::error::{BenchError, Result};

pub const USAGE: &str = "usage: mjml-bench path/to/file.mjml";

pub mod bench;

pub use crate::domain::model::{BenchReport, ReportFormat, Template};
pub use crate::domain::ports::{ConfigProvider, Converter, TemplateSource};
pub use crate::utils::error::Result;

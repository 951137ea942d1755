use crate::domain::model::{ReportFormat, Template};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// One call to `convert` is one invocation of the conversion routine.
pub trait Converter: Send + Sync {
    fn convert(&self, template: &str) -> Result<String>;

    fn name(&self) -> &str;
}

pub trait TemplateSource: Send + Sync {
    fn resolve(&self, path: &Path) -> Result<PathBuf>;

    fn load(&self, path: &Path) -> Result<Template>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&Path>;
    fn iterations(&self) -> usize;
    fn warmup(&self) -> usize;
    fn label(&self) -> &str;
    fn format(&self) -> ReportFormat;
}

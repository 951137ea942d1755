use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::model::Template;
use crate::domain::ports::TemplateSource;
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::validate_path;

#[derive(Debug, Clone, Default)]
pub struct FsTemplateSource;

impl FsTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for FsTemplateSource {
    /// Makes the path absolute against the working directory. Does not touch the file.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        validate_path("input", path)?;
        Ok(std::path::absolute(path)?)
    }

    fn load(&self, path: &Path) -> Result<Template> {
        let full_path = self.resolve(path)?;
        let bytes = fs::read(&full_path).map_err(|source| BenchError::TemplateReadError {
            path: full_path.clone(),
            source,
        })?;
        // Invalid UTF-8 sequences become U+FFFD rather than failing the run.
        let content = String::from_utf8_lossy(&bytes).into_owned();
        tracing::debug!("Loaded {} bytes from {}", content.len(), full_path.display());
        Ok(Template::new(full_path, content))
    }
}

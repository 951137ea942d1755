use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::utils::error::{BenchError, Result};

/// An MJML document loaded once and reused for every iteration.
#[derive(Debug, Clone)]
pub struct Template {
    pub path: PathBuf,
    pub content: String,
}

impl Template {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub const VALUES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for ReportFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(BenchError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::VALUES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub label: String,
    pub converter: String,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub input: PathBuf,
    pub input_bytes: usize,
    pub iterations: usize,
    pub warmup: usize,
    #[serde(skip)]
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
}

fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a BenchReport,
    elapsed_ms: f64,
    mean_iteration_ms: f64,
}

impl BenchReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    pub fn mean_iteration(&self) -> Duration {
        match u32::try_from(self.iterations) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.iterations as f64),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => {
                let json = JsonReport {
                    report: self,
                    elapsed_ms: self.elapsed_ms(),
                    mean_iteration_ms: self.mean_iteration().as_secs_f64() * 1_000.0,
                };
                Ok(serde_json::to_string(&json)?)
            }
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.3}ms", self.label, self.elapsed_ms())
    }
}

use std::hint::black_box;
use std::time::Instant;

use chrono::Utc;

use crate::config::settings::{DEFAULT_ITERATIONS, DEFAULT_LABEL};
use crate::core::{BenchReport, ConfigProvider, Converter, Result, Template};
use crate::utils::monitor::SystemMonitor;

pub struct BenchEngine<C: Converter> {
    converter: C,
    iterations: usize,
    warmup: usize,
    label: String,
    monitor: SystemMonitor,
}

impl<C: Converter> BenchEngine<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            iterations: DEFAULT_ITERATIONS,
            warmup: 0,
            label: DEFAULT_LABEL.to_string(),
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn from_config(converter: C, config: &impl ConfigProvider) -> Self {
        Self::new(converter)
            .with_iterations(config.iterations())
            .with_warmup(config.warmup())
            .with_label(config.label())
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor = SystemMonitor::new(enabled);
        self
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Converts `template` `warmup` times untimed, then `iterations` times
    /// under the clock. Outputs are discarded unread; the first conversion
    /// error aborts the run.
    pub fn run(&self, template: &Template) -> Result<BenchReport> {
        let input = template.content.as_str();
        tracing::info!(
            "Benchmarking {} ({} bytes) with {}: {} iterations, {} warm-up",
            template.path.display(),
            template.len(),
            self.converter.name(),
            self.iterations,
            self.warmup
        );

        if self.warmup > 0 {
            tracing::debug!("Warming up...");
            for _ in 0..self.warmup {
                let _ = black_box(self.converter.convert(black_box(input))?);
            }
        }

        self.monitor.log_stats("Before timed loop");

        let started_at = Utc::now();
        let start = Instant::now();
        for _ in 0..self.iterations {
            let _ = black_box(self.converter.convert(black_box(input))?);
        }
        let elapsed = start.elapsed();

        self.monitor.log_stats("After timed loop");
        self.monitor.log_final_stats();
        tracing::debug!("Timed loop finished in {:?}", elapsed);

        Ok(BenchReport {
            label: self.label.clone(),
            converter: self.converter.name().to_string(),
            input: template.path.clone(),
            input_bytes: template.len(),
            iterations: self.iterations,
            warmup: self.warmup,
            elapsed,
            started_at,
        })
    }
}

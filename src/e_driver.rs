use crate::e_config::DriverConfig;
use crate::e_error::DriverError;
use crate::e_normalizer::normalize;
use crate::e_position::Diagnostics;
use crate::e_runner::{Invoker, SubprocessInvoker};
use crate::prelude::*;

/// Runs the analyzer on a test project and returns its diagnostics in canonical form.
///
/// Test harnesses depend only on this, so a driver that calls the analyzer some
/// other way can be dropped in without touching them.
pub trait Driver {
    fn run(&self, dir: &Path) -> Result<Diagnostics, DriverError>;
}

/// Runs NilAway as a standalone binary.
#[derive(Debug, Clone)]
pub struct StandaloneDriver<I: Invoker = SubprocessInvoker> {
    invoker: I,
    analyzer: String,
}

impl StandaloneDriver<SubprocessInvoker> {
    pub fn from_config(config: DriverConfig) -> Self {
        let analyzer = config.analyzer.clone();
        StandaloneDriver {
            invoker: SubprocessInvoker::new(config),
            analyzer,
        }
    }
}

impl Default for StandaloneDriver<SubprocessInvoker> {
    fn default() -> Self {
        Self::from_config(DriverConfig::default())
    }
}

impl<I: Invoker> StandaloneDriver<I> {
    pub fn with_invoker(invoker: I, analyzer: impl Into<String>) -> Self {
        StandaloneDriver {
            invoker,
            analyzer: analyzer.into(),
        }
    }

    pub fn analyzer(&self) -> &str {
        &self.analyzer
    }
}

impl<I: Invoker> Driver for StandaloneDriver<I> {
    fn run(&self, dir: &Path) -> Result<Diagnostics, DriverError> {
        let raw = self.invoker.invoke(dir)?;
        let diagnostics = normalize(&raw, &self.analyzer)?;
        info!(
            "{} diagnostics collected from {}",
            diagnostics.len(),
            dir.display()
        );
        Ok(diagnostics)
    }
}

//! gfit-config: validate GFIT project configurations and generate the runner
//! launch script, per-suite properties files and Jenkins pipeline.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::LocalFilesystem;
use app::{
    AppContext,
    commands::{generate, pipeline},
};

pub use app::commands::generate::GenerateOutcome;
pub use app::commands::validate::ValidatedLayout;
pub use domain::{AppError, ConfigError, Product, TestConfiguration};

/// Validate the layout described by the project config at `config_path` and
/// write `rungfit.bat` plus one properties file per test suite.
///
/// Returns a `GenerateOutcome` listing the files written.
pub fn generate(config_path: &Path) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(LocalFilesystem::new());

    generate::execute(config_path, ctx.filesystem())
}

/// Print the Jenkins pipeline for the project config at `config_path`.
pub fn pipeline(config_path: &Path) -> Result<String, AppError> {
    let text = pipeline::execute(config_path)?;
    print!("{text}");
    Ok(text)
}

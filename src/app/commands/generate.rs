//! Generate command - validates the layout and writes rungfit.bat and the
//! per-suite properties files.

use std::path::{Path, PathBuf};

use tracing::info;

use super::validate::{self, ValidatedLayout};
use crate::domain::artifacts::{Launcher, SuiteProperties};
use crate::domain::project_paths as paths;
use crate::domain::{AppError, TestConfiguration};
use crate::ports::ProjectFilesystem;

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub config: TestConfiguration,
    pub layout: ValidatedLayout,
    /// Files written, launcher first, then properties in suite order.
    pub written: Vec<PathBuf>,
}

/// Execute the generate command for the project config at `config_path`.
///
/// Files written before a failure are left in place.
pub fn execute(
    config_path: &Path,
    fs: &impl ProjectFilesystem,
) -> Result<GenerateOutcome, AppError> {
    let config = TestConfiguration::load(config_path)?;
    let layout = validate::execute(&config, fs)?;
    let written = write_artifacts(&config, &layout, fs)?;
    Ok(GenerateOutcome { config, layout, written })
}

/// Write the launcher and every suite's properties file.
pub fn write_artifacts(
    config: &TestConfiguration,
    layout: &ValidatedLayout,
    fs: &impl ProjectFilesystem,
) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::with_capacity(config.test_suites().len() + 1);

    let launcher = Launcher::from_config(config).render();
    fs.write_file(&layout.launcher_file, &launcher)?;
    info!(path = %layout.launcher_file.display(), "wrote launcher");
    written.push(layout.launcher_file.clone());

    for suite in config.test_suites() {
        let path = paths::properties_file(config, suite);
        let content = SuiteProperties::for_suite(config, suite)?.render();
        fs.write_file(&path, &content)?;
        info!(path = %path.display(), suite = %suite, "wrote properties");
        written.push(path);
    }

    Ok(written)
}

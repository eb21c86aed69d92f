//! Directory layout checks run before any artifact is generated.
//!
//! Checks run in a fixed order and stop at the first missing directory. The
//! two project leaf directories are created when absent instead of failing.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::project_paths::{self as paths, windows_display};
use crate::domain::{AppError, ConfigError, TestConfiguration};
use crate::ports::ProjectFilesystem;

/// Directories confirmed (or created) by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLayout {
    /// `<workspace>/<environment>/<project>`
    pub workspace_project_dir: PathBuf,
    /// `<root>/<environment>/<product>/<project>`
    pub project_dir: PathBuf,
    /// `<project_dir>/rungfit.bat`
    pub launcher_file: PathBuf,
    /// Leaf directories that did not exist and were created.
    pub created: Vec<PathBuf>,
}

/// Validate the directory tree described by `config`.
pub fn execute(
    config: &TestConfiguration,
    fs: &impl ProjectFilesystem,
) -> Result<ValidatedLayout, AppError> {
    let mut created = Vec::new();

    validate_root(config, fs)?;
    let workspace_project_dir = validate_workspace(config, fs, &mut created)?;
    let project_dir = validate_exec_dir(config, fs, &mut created)?;
    validate_test_suites(config, fs)?;

    Ok(ValidatedLayout {
        workspace_project_dir,
        launcher_file: paths::launcher_file(config),
        project_dir,
        created,
    })
}

fn validate_root(config: &TestConfiguration, fs: &impl ProjectFilesystem) -> Result<(), ConfigError> {
    require_dir(fs, &paths::root_dir(config), "Root directory")
}

fn validate_workspace(
    config: &TestConfiguration,
    fs: &impl ProjectFilesystem,
    created: &mut Vec<PathBuf>,
) -> Result<PathBuf, AppError> {
    require_dir(fs, &paths::workspace_dir(config), "Workspace directory")?;
    require_dir(
        fs,
        &paths::workspace_environment_dir(config),
        "Environment directory in workspace",
    )?;

    let project_dir = paths::workspace_project_dir(config);
    if !fs.is_dir(&project_dir) {
        println!("Creating workspace project directory {}", project_dir.display());
        create_dir(fs, &project_dir)?;
        created.push(project_dir.clone());
    }
    println!("Jenkins workspace is: {}", windows_display(&project_dir));
    Ok(project_dir)
}

fn validate_exec_dir(
    config: &TestConfiguration,
    fs: &impl ProjectFilesystem,
    created: &mut Vec<PathBuf>,
) -> Result<PathBuf, AppError> {
    require_dir(fs, &paths::root_dir(config), "Root directory")?;
    require_dir(fs, &paths::environment_dir(config), "Environment directory")?;
    require_dir(fs, &paths::product_dir(config), "Product directory")?;

    let project_dir = paths::project_dir(config);
    if !fs.is_dir(&project_dir) {
        println!("Creating project directory - {}", project_dir.display());
        create_dir(fs, &project_dir)?;
        created.push(project_dir.clone());
    }
    println!("Jenkins batch command is: {}", windows_display(&paths::launcher_file(config)));
    Ok(project_dir)
}

fn validate_test_suites(
    config: &TestConfiguration,
    fs: &impl ProjectFilesystem,
) -> Result<(), ConfigError> {
    require_dir(fs, &paths::testsuites_dir(config), "Test suite root directory")?;
    require_dir(fs, &paths::testsuites_product_dir(config), "Test suite product directory")?;
    require_dir(fs, &paths::suite_source_dir(config), "Test suite directory")?;

    for suite in config.test_suites() {
        require_dir(fs, &paths::suite_dir(config, suite), "Suite directory")?;
    }
    Ok(())
}

fn require_dir(
    fs: &impl ProjectFilesystem,
    path: &Path,
    what: &'static str,
) -> Result<(), ConfigError> {
    if fs.is_dir(path) {
        debug!(path = %path.display(), "{what} present");
        Ok(())
    } else {
        Err(ConfigError::missing_dir(what, path))
    }
}

/// Create `path` and confirm it is visible afterwards.
fn create_dir(fs: &impl ProjectFilesystem, path: &Path) -> Result<(), AppError> {
    fs.create_dir(path)?;
    if !fs.is_dir(path) {
        return Err(ConfigError::DirectoryNotCreated(path.to_path_buf()).into());
    }
    info!(path = %path.display(), "created directory");
    Ok(())
}

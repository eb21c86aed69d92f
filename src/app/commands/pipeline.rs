//! Pipeline command - renders the Jenkins pipeline for a project config.

use std::path::Path;

use crate::domain::artifacts::Pipeline;
use crate::domain::project_paths::{self as paths, windows_display};
use crate::domain::{AppError, TestConfiguration};

/// Render the pipeline for the project config at `config_path`.
///
/// Read-only: the directory layout is not checked.
pub fn execute(config_path: &Path) -> Result<String, AppError> {
    let config = TestConfiguration::load(config_path)?;
    Ok(render(&config))
}

/// Render the pipeline using the workspace and launcher locations of `config`.
pub fn render(config: &TestConfiguration) -> String {
    let workspace_path = windows_display(&paths::workspace_project_dir(config));
    let run_file = windows_display(&paths::launcher_file(config));
    Pipeline { workspace_path: &workspace_path, project: config.project(), run_file: &run_file }
        .render()
}

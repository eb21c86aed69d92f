//! `ProjectFilesystem` implementation backed by the local disk.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::domain::{AppError, ConfigError};
use crate::ports::ProjectFilesystem;

/// Filesystem store operating directly on the paths it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        trace!(path = %path.display(), "create_dir");
        fs::create_dir(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        fs::write(path, content)
            .map_err(|source| ConfigError::WriteFailed { path: path.to_path_buf(), source })?;
        Ok(())
    }
}

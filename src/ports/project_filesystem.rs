//! Filesystem operations the generator depends on.

use std::path::Path;

use crate::domain::AppError;

/// Port for the directory checks and file writes of one generation run.
///
/// Paths are absolute, taken as-is from the project config.
pub trait ProjectFilesystem {
    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}

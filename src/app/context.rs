use crate::ports::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem> {
    filesystem: F,
}

impl<F: ProjectFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    /// Get a reference to the filesystem the run validates and writes to.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}

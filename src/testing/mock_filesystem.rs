use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ConfigError};
use crate::ports::ProjectFilesystem;

/// In-memory filesystem for testing.
#[derive(Default)]
pub struct MockFilesystem {
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub created: RefCell<Vec<PathBuf>>,
    /// When set, `create_dir` reports success without creating anything.
    pub drop_creates: Cell<bool>,
}

#[allow(dead_code)]
impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register directories (and all their ancestors).
    pub fn with_dirs<P: AsRef<Path>>(self, dirs: impl IntoIterator<Item = P>) -> Self {
        for dir in dirs {
            self.add_dir(dir.as_ref());
        }
        self
    }

    pub fn add_dir(&self, dir: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn remove_dir(&self, dir: &Path) {
        self.dirs.borrow_mut().retain(|existing| !existing.starts_with(dir));
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl ProjectFilesystem for MockFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let parent_exists = path.parent().is_some_and(|parent| self.is_dir(parent));
        if !parent_exists {
            return Err(io::Error::new(io::ErrorKind::NotFound, "parent directory missing").into());
        }
        self.created.borrow_mut().push(path.to_path_buf());
        if !self.drop_creates.get() {
            self.dirs.borrow_mut().insert(path.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let parent_exists = path.parent().is_some_and(|parent| self.is_dir(parent));
        if !parent_exists {
            return Err(ConfigError::WriteFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            }
            .into());
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

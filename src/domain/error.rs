use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure detected while reading the project configuration or checking the
/// directory layout it describes.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file is absent or is not a regular file.
    #[error("Project config file does not exist - {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("Unable to read project config file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not well-formed XML.
    #[error("Malformed project config {origin}: {details}")]
    Malformed { origin: String, details: String },

    /// The document element is not `TestConfiguration`.
    #[error("Root element is not TestConfiguration - {0}")]
    UnexpectedRoot(String),

    /// A required child element is missing.
    #[error("Element {tag} was not found in element {parent}")]
    MissingElement { tag: String, parent: String },

    /// A required element is present but carries no text.
    #[error("Element {0} is empty")]
    EmptyElement(String),

    /// Product code outside of BC, CC, PC.
    #[error("Invalid product abbreviation - {0}")]
    InvalidProduct(String),

    /// `TestSuites` has no `TestSuite` children.
    #[error("No test suites were found")]
    NoTestSuites,

    /// No port is registered for the product code.
    #[error("Product abbreviation is incorrect - {0}")]
    UnknownProductPort(String),

    /// A directory the run depends on is absent.
    #[error("{what} does not exist - {}", path.display())]
    MissingDirectory { what: &'static str, path: PathBuf },

    /// A directory was created but is still not visible afterwards.
    #[error("Directory was not created - {}", .0.display())]
    DirectoryNotCreated(PathBuf),

    /// A generated artifact could not be written.
    #[error("Unable to open {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    pub fn missing_dir(what: &'static str, path: impl Into<PathBuf>) -> Self {
        ConfigError::MissingDirectory { what, path: path.into() }
    }
}

/// Library-wide error type for gfit-config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or directory layout issue.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying I/O failure outside of the configuration checks.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Whether this failure is one of the configuration checks rather than an
    /// unexpected fault.
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }
}

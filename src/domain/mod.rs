pub mod artifacts;
pub mod configuration;
pub mod error;
pub mod project_paths;

pub use configuration::{ConfigDocument, ConfigSource, Product, TestConfiguration};
pub use error::{AppError, ConfigError};

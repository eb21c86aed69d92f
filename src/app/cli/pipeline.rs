//! Pipeline command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_pipeline(config: &Path) -> Result<(), AppError> {
    crate::pipeline(config).map(|_| ())
}

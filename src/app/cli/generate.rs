//! Generate command implementation.

use std::path::Path;

/// Run the generate command and return the process exit code.
pub fn run_generate(config: &Path) -> i32 {
    println!("Starting ProjectConfig");
    let exit_code = match crate::generate(config) {
        Ok(outcome) => {
            println!("Generated {} file(s):", outcome.written.len());
            for path in &outcome.written {
                println!("  {}", path.display());
            }
            0
        }
        Err(e) => {
            super::report(&e);
            1
        }
    };
    println!("Ending ProjectConfig");
    exit_code
}

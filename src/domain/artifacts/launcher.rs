//! `rungfit.bat` content.

use super::separators::backslashed;
use crate::domain::TestConfiguration;

/// Location of the runner jar relative to the drive variable.
pub const RUNNER_JAR: &str = "%DRIVE%\\EXEC\\runGFIT.jar";

const LINE_END: &str = "\r\n";

/// Data needed to render the launcher script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    /// Root of the execution tree, assigned to `%DRIVE%`.
    pub drive: String,
    /// Properties file of each suite, relative to `%DRIVE%`, in run order.
    pub property_files: Vec<String>,
}

impl Launcher {
    pub fn from_config(config: &TestConfiguration) -> Self {
        Self {
            drive: backslashed(config.root()),
            property_files: config
                .test_suites()
                .iter()
                .map(|suite| property_reference(config, suite))
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut script = format!("SET DRIVE={}{LINE_END}", self.drive);
        for property_file in &self.property_files {
            script.push_str(&invocation_line(property_file));
            script.push_str(LINE_END);
        }
        script
    }
}

/// `\<environment>\<product>\<project>\<suite>.properties`
pub fn property_reference(config: &TestConfiguration, suite: &str) -> String {
    backslashed(&format!(
        "\\{}\\{}\\{}\\{suite}.properties",
        config.environment(),
        config.product().code(),
        config.project()
    ))
}

fn invocation_line(property_file: &str) -> String {
    format!("java -ea -jar {RUNNER_JAR} -prop %DRIVE%{property_file}")
}

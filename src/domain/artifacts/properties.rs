//! `<suite>.properties` content consumed by the GFIT runner.

use super::separators::double_backslashed;
use crate::domain::configuration::port_for;
use crate::domain::project_paths::TESTSUITES_DIR;
use crate::domain::{ConfigError, TestConfiguration};

pub const USERNAME: &str = "su";
pub const PASSWORD: &str = "gw";
/// Runner timeout in milliseconds.
pub const TIMEOUT: &str = "960000";

/// Computed fields of one suite's properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteProperties {
    pub url: String,
    pub testsuite: String,
    pub reports: String,
}

impl SuiteProperties {
    pub fn for_suite(config: &TestConfiguration, suite: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            url: application_url(config)?,
            testsuite: testsuite_path(config, suite),
            reports: reports_path(config, suite),
        })
    }

    /// Key/value pairs in file order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("url", self.url.as_str()),
            ("username", USERNAME),
            ("password", PASSWORD),
            ("testsuite", self.testsuite.as_str()),
            ("reports", self.reports.as_str()),
            ("timeout", TIMEOUT),
        ]
    }

    pub fn render(&self) -> String {
        self.entries().iter().map(|(key, value)| format!("{key}={value}\n")).collect()
    }
}

/// `http://<server>:<port>/<product>`
pub fn application_url(config: &TestConfiguration) -> Result<String, ConfigError> {
    let context = config.product().context();
    let port = port_for(context)?;
    Ok(format!("http://{}:{port}/{context}", config.server()))
}

/// `<root>/TESTSUITES/<product>/<project>/<suite>`, escaped.
pub fn testsuite_path(config: &TestConfiguration, suite: &str) -> String {
    double_backslashed(&format!(
        "{}/{TESTSUITES_DIR}/{}/{}/{suite}",
        config.root(),
        config.product().code(),
        config.project()
    ))
}

/// `<workspace>/<environment>/<project>/<suite>`, escaped.
pub fn reports_path(config: &TestConfiguration, suite: &str) -> String {
    double_backslashed(&format!(
        "{}/{}/{}/{suite}",
        config.workspace(),
        config.environment(),
        config.project()
    ))
}

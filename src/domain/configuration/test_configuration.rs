use std::path::Path;

use tracing::debug;

use super::product::Product;
use super::source::{
    ConfigDocument, ConfigSource, element_text, fetch_all_elements, fetch_element, fetch_text,
    has_element,
};
use crate::domain::ConfigError;

pub const ROOT: &str = "Root";
pub const WORKSPACE: &str = "Workspace";
pub const PROJECT: &str = "Project";
pub const ENVIRONMENT: &str = "Environment";
pub const PRODUCT: &str = "Product";
pub const SERVER: &str = "Server";
pub const SUITE_DIRECTORY: &str = "SuiteDirectory";
pub const TEST_SUITES: &str = "TestSuites";
pub const TEST_SUITE: &str = "TestSuite";

/// Validated contents of a project config file.
///
/// Every required field is populated once a value exists; there is no way to
/// build or mutate one outside of [`TestConfiguration::from_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfiguration {
    root: String,
    workspace: String,
    project: String,
    environment: String,
    product: Product,
    server: String,
    suite_directory: String,
    test_suites: Vec<String>,
}

impl TestConfiguration {
    /// Read, parse and validate the project config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = ConfigSource::read(path)?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let document = source.parse()?;
        let config = Self::from_document(&document)?;
        debug!(
            origin = source.origin(),
            project = %config.project,
            product = %config.product,
            suites = config.test_suites.len(),
            "loaded project config"
        );
        Ok(config)
    }

    /// Resolve every field of the configuration, stopping at the first
    /// missing or invalid element.
    pub fn from_document(document: &ConfigDocument<'_>) -> Result<Self, ConfigError> {
        let configuration = document.configuration();

        let root = fetch_text(configuration, ROOT)?;
        let workspace = fetch_text(configuration, WORKSPACE)?;
        let project = fetch_text(configuration, PROJECT)?;
        let environment = fetch_text(configuration, ENVIRONMENT)?;
        let product = fetch_text(configuration, PRODUCT)?.parse::<Product>()?;
        let server = fetch_text(configuration, SERVER)?;

        let suite_directory = if has_element(configuration, SUITE_DIRECTORY) {
            fetch_text(configuration, SUITE_DIRECTORY)?
        } else {
            project.clone()
        };

        let suites_element = fetch_element(configuration, TEST_SUITES)?;
        let test_suites = fetch_all_elements(suites_element, TEST_SUITE)
            .into_iter()
            .map(element_text)
            .collect::<Result<Vec<_>, _>>()?;
        if test_suites.is_empty() {
            return Err(ConfigError::NoTestSuites);
        }

        Ok(Self {
            root,
            workspace,
            project,
            environment,
            product,
            server,
            suite_directory,
            test_suites,
        })
    }

    /// Root of the GFIT execution tree.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Base of the Jenkins workspaces.
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn product(&self) -> Product {
        self.product
    }

    /// Host running the application under test.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Directory under `TESTSUITES/<product>` holding this project's suites.
    ///
    /// Usually the project name, unless `SuiteDirectory` says otherwise.
    pub fn suite_directory(&self) -> &str {
        &self.suite_directory
    }

    pub fn test_suites(&self) -> &[String] {
        &self.test_suites
    }
}

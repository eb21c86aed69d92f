//! Filesystem locations implied by a project config.

use std::path::{Path, PathBuf};

use crate::domain::TestConfiguration;

/// Directory under the root holding the test suite sources.
pub const TESTSUITES_DIR: &str = "TESTSUITES";

/// Name of the generated launcher script.
pub const LAUNCHER_FILE: &str = "rungfit.bat";

/// `<root>/`
pub fn root_dir(config: &TestConfiguration) -> PathBuf {
    PathBuf::from(config.root())
}

/// `<workspace>/`
pub fn workspace_dir(config: &TestConfiguration) -> PathBuf {
    PathBuf::from(config.workspace())
}

/// `<workspace>/<environment>/`
pub fn workspace_environment_dir(config: &TestConfiguration) -> PathBuf {
    workspace_dir(config).join(config.environment())
}

/// `<workspace>/<environment>/<project>/`
pub fn workspace_project_dir(config: &TestConfiguration) -> PathBuf {
    workspace_environment_dir(config).join(config.project())
}

/// `<root>/<environment>/`
pub fn environment_dir(config: &TestConfiguration) -> PathBuf {
    root_dir(config).join(config.environment())
}

/// `<root>/<environment>/<product>/`
pub fn product_dir(config: &TestConfiguration) -> PathBuf {
    environment_dir(config).join(config.product().code())
}

/// `<root>/<environment>/<product>/<project>/`, where generated files land.
pub fn project_dir(config: &TestConfiguration) -> PathBuf {
    product_dir(config).join(config.project())
}

/// `<root>/<environment>/<product>/<project>/rungfit.bat`
pub fn launcher_file(config: &TestConfiguration) -> PathBuf {
    project_dir(config).join(LAUNCHER_FILE)
}

/// `<root>/<environment>/<product>/<project>/<suite>.properties`
pub fn properties_file(config: &TestConfiguration, suite: &str) -> PathBuf {
    project_dir(config).join(format!("{suite}.properties"))
}

/// `<root>/TESTSUITES/`
pub fn testsuites_dir(config: &TestConfiguration) -> PathBuf {
    root_dir(config).join(TESTSUITES_DIR)
}

/// `<root>/TESTSUITES/<product>/`
pub fn testsuites_product_dir(config: &TestConfiguration) -> PathBuf {
    testsuites_dir(config).join(config.product().code())
}

/// `<root>/TESTSUITES/<product>/<suite directory>/`
pub fn suite_source_dir(config: &TestConfiguration) -> PathBuf {
    testsuites_product_dir(config).join(config.suite_directory())
}

/// `<root>/TESTSUITES/<product>/<suite directory>/<suite>/`
pub fn suite_dir(config: &TestConfiguration, suite: &str) -> PathBuf {
    suite_source_dir(config).join(suite)
}

/// Render a path with Windows separators for display and generated text.
pub fn windows_display(path: &Path) -> String {
    path.to_string_lossy().replace('/', "\\")
}

//! Shared testing utilities for gfit-config CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENVIRONMENT: &str = "QA";
pub const PRODUCT: &str = "BC";
pub const PROJECT: &str = "P1";
pub const SERVER: &str = "host1";

/// Isolated exec root and workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    temp: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty environment (no exec root, no workspace).
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory for tests");
        Self { temp }
    }

    /// Create an environment where every directory of the layout exists.
    pub fn with_layout(suites: &[&str]) -> Self {
        let ctx = Self::new();
        ctx.create_layout(suites);
        ctx
    }

    pub fn root(&self) -> PathBuf {
        self.temp.path().join("exec")
    }

    pub fn workspace(&self) -> PathBuf {
        self.temp.path().join("ws")
    }

    /// `<root>/<environment>/<product>/<project>`
    pub fn project_dir(&self) -> PathBuf {
        self.root().join(ENVIRONMENT).join(PRODUCT).join(PROJECT)
    }

    /// `<workspace>/<environment>/<project>`
    pub fn workspace_project_dir(&self) -> PathBuf {
        self.workspace().join(ENVIRONMENT).join(PROJECT)
    }

    pub fn suite_dir(&self, suite: &str) -> PathBuf {
        self.root().join("TESTSUITES").join(PRODUCT).join(PROJECT).join(suite)
    }

    pub fn create_layout(&self, suites: &[&str]) {
        for dir in [self.project_dir(), self.workspace_project_dir()] {
            fs::create_dir_all(dir).expect("Failed to create project directory");
        }
        for suite in suites {
            fs::create_dir_all(self.suite_dir(suite)).expect("Failed to create suite directory");
        }
    }

    pub fn remove_dir(&self, dir: &Path) {
        fs::remove_dir_all(dir).expect("Failed to remove directory");
    }

    /// Project config XML pointing at this environment.
    pub fn config_xml(&self, suites: &[&str]) -> String {
        let suites: String =
            suites.iter().map(|suite| format!("        <TestSuite>{suite}</TestSuite>\n")).collect();
        format!(
            "<TestConfiguration>
    <Root>{root}</Root>
    <Workspace>{workspace}</Workspace>
    <Project>{PROJECT}</Project>
    <Environment>{ENVIRONMENT}</Environment>
    <Product>{PRODUCT}</Product>
    <Server>{SERVER}</Server>
    <TestSuites>
{suites}    </TestSuites>
</TestConfiguration>
",
            root = self.root().display(),
            workspace = self.workspace().display(),
        )
    }

    /// Write a project config file and return its path.
    pub fn write_config(&self, xml: &str) -> PathBuf {
        self.write_config_named("project.xml", xml)
    }

    pub fn write_config_named(&self, name: &str, xml: &str) -> PathBuf {
        let file = self.temp.child(name);
        file.write_str(xml).expect("Failed to write project config");
        file.path().to_path_buf()
    }

    /// Build a command for invoking the compiled `gfit-config` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gfit-config").expect("Failed to locate gfit-config binary");
        cmd.current_dir(self.temp.path()).env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    pub fn assert_generated_nothing(&self) {
        if self.project_dir().exists() {
            let entries = fs::read_dir(self.project_dir()).unwrap().count();
            assert_eq!(entries, 0, "project directory should hold no generated files");
        }
    }
}

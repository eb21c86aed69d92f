mod mock_filesystem;

pub use mock_filesystem::MockFilesystem;

use crate::domain::{ConfigSource, TestConfiguration};

/// Project config document with the given suites.
///
/// `TestSuites` sits on a single line so tests can drop it by filtering lines.
pub fn config_xml(suites: &[&str]) -> String {
    let suites: String =
        suites.iter().map(|suite| format!("<TestSuite>{suite}</TestSuite>")).collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TestConfiguration>
    <Root>C:/exec</Root>
    <Workspace>C:/ws</Workspace>
    <Project>P1</Project>
    <Environment>QA</Environment>
    <Product>BC</Product>
    <Server>host1</Server>
    <TestSuites>{suites}</TestSuites>
</TestConfiguration>
"#
    )
}

pub fn parse_config(xml: &str) -> TestConfiguration {
    TestConfiguration::from_source(&ConfigSource::from_text("test.xml", xml))
        .expect("test config should parse")
}

pub fn sample_config(suites: &[&str]) -> TestConfiguration {
    parse_config(&config_xml(suites))
}

//! Declarative Jenkins pipeline running the generated launcher.

use super::separators::forward_slashed;

/// Glob of the JUnit reports collected after every run.
pub const REPORT_GLOB: &str = "*.xml";

/// Agent label the job is pinned to.
pub const AGENT_LABEL: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<'a> {
    pub workspace_path: &'a str,
    pub project: &'a str,
    pub run_file: &'a str,
}

impl Pipeline<'_> {
    /// Render the pipeline text.
    ///
    /// Jenkins treats `\` as an escape character, so every backslash in the
    /// output is turned into `/`.
    pub fn render(&self) -> String {
        let Pipeline { workspace_path, project, run_file } = self;
        let text = format!(
            r#"pipeline {{
    agent {{
        node {{
            label "{AGENT_LABEL}"
            customWorkspace "{workspace_path}"
        }}
    }}
    stages {{
        stage('{project}') {{
            steps {{
                bat "{run_file}"
            }}
        }}
    }}
    post {{
        always {{
            junit '{REPORT_GLOB}'
        }}
    }}
}}
"#
        );
        forward_slashed(&text)
    }
}

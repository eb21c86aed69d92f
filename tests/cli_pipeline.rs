mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn prints_pipeline_for_project() {
    let ctx = TestContext::new();
    let config = ctx.write_config(&ctx.config_xml(&["S1"]));
    let workspace = ctx.workspace_project_dir().display().to_string().replace('\\', "/");
    let run_file = ctx.project_dir().join("rungfit.bat").display().to_string().replace('\\', "/");

    ctx.cli()
        .arg("pipeline")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pipeline {"))
        .stdout(predicate::str::contains(format!("customWorkspace \"{workspace}\"")))
        .stdout(predicate::str::contains("stage('P1')"))
        .stdout(predicate::str::contains(format!("bat \"{run_file}\"")))
        .stdout(predicate::str::contains("junit '*.xml'"))
        .stdout(predicate::str::contains("\\").not());
}

#[test]
fn pipeline_does_not_touch_the_filesystem() {
    let ctx = TestContext::new();
    let config = ctx.write_config(&ctx.config_xml(&["S1"]));

    ctx.cli().args(["p"]).arg(&config).assert().success();

    assert!(!ctx.root().exists());
    assert!(!ctx.workspace().exists());
}

#[test]
fn pipeline_reports_config_errors() {
    let ctx = TestContext::new();
    let config = ctx.write_config("<TestConfiguration><Root>/x</Root>");

    ctx.cli()
        .arg("pipeline")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Malformed project config"));
}

#[test]
fn pipeline_requires_config_argument() {
    let ctx = TestContext::new();

    ctx.cli().arg("pipeline").assert().code(1).stdout(predicate::str::contains("To execute"));
}

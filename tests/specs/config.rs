//! Config file specs.

use crate::prelude::*;

#[test]
fn unknown_key_warns_and_continues() {
    let project = Project::empty();
    project.config("[session]\nhistory = 4\ncolour = true\n");
    session("history\n")
        .pwd(project.path())
        .runs()
        .stdout_has("History (0/4):")
        .stderr_has("unrecognized field `session.colour` (ignored)");
}

#[test]
fn unsupported_version_is_config_error() {
    let project = Project::empty();
    project.file("untangle.toml", "version = 2\n");
    session("")
        .pwd(project.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn missing_version_is_config_error() {
    let project = Project::empty();
    project.file("untangle.toml", "[session]\nhistory = 4\n");
    session("")
        .pwd(project.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

#[test]
fn explicit_config_flag_is_used() {
    let project = Project::empty();
    project.file("custom/settings.toml", "version = 1\n[session]\nhistory = 7\n");
    session("history\n")
        .pwd(project.path())
        .args(&["-C", "custom/settings.toml"])
        .runs()
        .stdout_has("History (0/7):");
}

#[test]
fn explicit_config_must_exist() {
    let project = Project::empty();
    session("")
        .pwd(project.path())
        .args(&["--config", "nowhere.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn config_discovered_from_subdirectory() {
    let project = Project::empty();
    project.config("[session]\nhistory = 5\n");
    project.file("nested/deeper/.keep", "");
    session("history\n")
        .pwd(project.path().join("nested/deeper"))
        .runs()
        .stdout_has("History (0/5):");
}

#[test]
fn zero_history_in_config_is_config_error() {
    let project = Project::empty();
    project.config("[session]\nhistory = 0\n");
    session("").pwd(project.path()).exits(2);
}

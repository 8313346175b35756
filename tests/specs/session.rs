//! Session command specs.

use crate::prelude::*;

#[test]
fn session_answers_each_query() {
    let project = Project::empty();
    session("100010101 101 0\n000 1 0\n")
        .pwd(project.path())
        .runs()
        .stdout_eq(concat!(
            "SUCCESS: '100010101' IS an interweaving of patterns '101' and '0'\n",
            "  region: 0..5\n",
            "FAILURE: '000' is NOT an interweaving of patterns '1' and '0'\n",
        ));
}

#[test]
fn session_skips_comments_and_blank_lines() {
    let project = Project::empty();
    session("# warm up\n\n   \n10 1 0\n")
        .pwd(project.path())
        .runs()
        .stdout_has("SUCCESS: '10'")
        .stdout_lacks("warm up");
}

#[test]
fn session_history_lists_most_recent_first() {
    let project = Project::empty();
    let run = session("10 1 0\n000 1 0\nhistory\n")
        .pwd(project.path())
        .runs();
    let stdout = run.stdout();
    let listing = stdout.split("History (2/10):\n").nth(1).unwrap();
    assert_eq!(
        listing,
        "  no match: s='000', x='1', y='0'\n  match: s='10', x='1', y='0'\n"
    );
}

#[test]
fn session_history_is_bounded() {
    let project = Project::empty();
    session("10 1 0\n01 0 1\n000 1 0\nhistory\n")
        .pwd(project.path())
        .args(&["--history", "2"])
        .runs()
        .stdout_has("History (2/2):")
        .stdout_lacks("s='10'");
}

#[test]
fn session_reports_malformed_lines_and_continues() {
    let project = Project::empty();
    session("1010 10\n1010 10 1\n")
        .pwd(project.path())
        .runs()
        .stderr_has("line 1: all fields must be filled out")
        .stdout_has("SUCCESS: '1010'");
}

#[test]
fn session_zero_history_is_argument_error() {
    let project = Project::empty();
    session("")
        .pwd(project.path())
        .args(&["--history", "0"])
        .exits(2);
}

#[test]
fn session_history_capacity_from_config() {
    let project = Project::empty();
    project.config("[session]\nhistory = 3\n");
    session("history\n")
        .pwd(project.path())
        .runs()
        .stdout_has("History (0/3):");
}

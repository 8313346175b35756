//! Bench command specs.

use crate::prelude::*;

fn bench_cmd(project: &Project) -> std::process::Command {
    let mut cmd = untangle_cmd();
    cmd.arg("bench").current_dir(project.path());
    cmd
}

#[test]
fn bench_text_prints_one_row_per_run() {
    let project = Project::empty();
    let mut cmd = bench_cmd(&project);
    cmd.args(["--signal-lengths", "20,40", "--pattern-sizes", "4x4"]);
    let run = run_exits(cmd, 0)
        .stdout_has("Signal Length   | Pattern X  | Pattern Y")
        .stdout_lacks("Comparisons");
    let rows = run
        .stdout()
        .lines()
        .filter(|line| line.starts_with("20 ") || line.starts_with("40 "))
        .count();
    assert_eq!(rows, 2);
}

#[test]
fn bench_json_reports_every_run() {
    let project = Project::empty();
    let mut cmd = bench_cmd(&project);
    cmd.args([
        "--signal-lengths",
        "20,40",
        "--pattern-sizes",
        "4x4,6x2",
        "--count",
        "-o",
        "json",
    ]);
    let run = run_exits(cmd, 0);
    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();

    assert!(json["generated_at"].is_string());
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for record in results {
        assert!(record["execution_time_ms"].is_number());
        assert!(record["result"].is_boolean());
        assert!(record["comparisons"].as_u64().unwrap() > 0);
        // Y takes X's length whatever was requested
        assert_eq!(record["pattern_x_length"], record["pattern_y_length"]);
    }
    assert_eq!(results[0]["signal_length"], 20);
    assert_eq!(results[0]["pattern_x"], "0101");
    assert_eq!(results[0]["pattern_y"], "0100");
}

#[test]
fn bench_save_writes_report_file() {
    let project = Project::empty();
    let report = project.path().join("out/report.json");
    std::fs::create_dir_all(report.parent().unwrap()).unwrap();

    let mut cmd = bench_cmd(&project);
    cmd.args(["--signal-lengths", "16", "--pattern-sizes", "4x4", "--save"])
        .arg(&report);
    run_exits(cmd, 0).stdout_has("Results saved to");

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(saved["results"].as_array().unwrap().len(), 1);
}

#[test]
fn bench_grid_from_config() {
    let project = Project::empty();
    project.config("[bench]\nsignal_lengths = [12]\npattern_sizes = [[4, 4]]\n");
    let run = run_exits(
        {
            let mut cmd = bench_cmd(&project);
            cmd.args(["-o", "json"]);
            cmd
        },
        0,
    );
    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["signal_length"], 12);
}

#[test]
fn bench_rejects_zero_pattern_size() {
    let project = Project::empty();
    let mut cmd = bench_cmd(&project);
    cmd.args(["--pattern-sizes", "0x4"]);
    run_exits(cmd, 2).stderr_has("lengths must be at least 1");
}

#[test]
fn bench_rejects_zero_signal_length() {
    let project = Project::empty();
    let mut cmd = bench_cmd(&project);
    cmd.args(["--signal-lengths", "0", "--pattern-sizes", "4x4"]);
    run_exits(cmd, 2).stderr_has("untangle: argument error");
}

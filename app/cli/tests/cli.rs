//! Black-box tests for the `firbench` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fmt::Write as _;
use std::fs;

const ALGORITHMS: [&str; 5] = [
    "JuceConv",
    "JuceFIR",
    "InnerProdFIR",
    "InnerProdNoWrapFIR",
    "SimdFIR",
];

fn fixture_log(ir_sizes: &[u32]) -> String {
    let mut log = String::new();
    for &ir_size in ir_sizes {
        writeln!(log, "Running with IR size: {} samples", ir_size).unwrap();
        for (i, algorithm) in ALGORITHMS.iter().enumerate() {
            writeln!(log, "{}: {:.3}", algorithm, 0.5 * (i + 1) as f64).unwrap();
        }
        writeln!(log).unwrap();
    }
    log
}

#[test]
fn report_renders_charts_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("results_win.txt");
    fs::write(&log, fixture_log(&[16, 17, 32])).unwrap();
    let figures = dir.path().join("figures");

    Command::cargo_bin("firbench")
        .unwrap()
        .arg("report")
        .arg(&log)
        .arg("--output-dir")
        .arg(&figures)
        .arg("--label")
        .arg("Windows")
        .arg("--quiet")
        .assert()
        .success();

    assert!(figures.join("results_win_pow2.svg").is_file());
    assert!(figures.join("results_win_other.svg").is_file());
    assert!(figures.join("results_win_summary.md").is_file());

    let svg = fs::read_to_string(figures.join("results_win_pow2.svg")).unwrap();
    assert!(svg.contains("Power of 2 Benchmarks (Windows)"));
}

#[test]
fn report_processes_multiple_logs() {
    let dir = tempfile::tempdir().unwrap();
    let win = dir.path().join("results_win.txt");
    let mac = dir.path().join("results_mac.txt");
    fs::write(&win, fixture_log(&[16, 17])).unwrap();
    fs::write(&mac, fixture_log(&[64, 67])).unwrap();
    let figures = dir.path().join("figures");

    Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("report")
        .arg(&win)
        .arg(&mac)
        .arg("--output-dir")
        .arg(&figures)
        .assert()
        .success();

    for name in [
        "results_win_pow2.svg",
        "results_win_other.svg",
        "results_mac_pow2.svg",
        "results_mac_other.svg",
    ] {
        assert!(figures.join(name).is_file(), "missing {}", name);
    }
}

#[test]
fn report_fails_on_malformed_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("bad.txt");
    fs::write(&log, "Running with IR size: 16 samples\nJuceConv: 1.0\n").unwrap();

    Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("report")
        .arg(&log)
        .arg("--output-dir")
        .arg(dir.path().join("figures"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed measurement"));
}

#[test]
fn report_rejects_extra_labels() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("results.txt");
    fs::write(&log, fixture_log(&[16])).unwrap();

    Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("report")
        .arg(&log)
        .arg("--label")
        .arg("One")
        .arg("--label")
        .arg("Two")
        .assert()
        .failure()
        .stderr(predicate::str::contains("labels"));
}

#[test]
fn inspect_prints_markdown_tables() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("results.txt");
    fs::write(&log, fixture_log(&[16, 17])).unwrap();

    Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("inspect")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Power of 2 IR sizes"))
        .stdout(predicate::str::contains("| 17 |"));
}

#[test]
fn inspect_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("results.txt");
    fs::write(&log, fixture_log(&[16, 17])).unwrap();

    let output = Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("inspect")
        .arg(&log)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["label"], "results");
    assert_eq!(value["pow2"]["ir_sizes"][0], 16);
    assert_eq!(value["other"]["ir_sizes"][0], 17);
}

#[test]
fn inspect_missing_file_fails() {
    Command::cargo_bin("firbench")
        .unwrap()
        .arg("--quiet")
        .arg("inspect")
        .arg("/nonexistent/results.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read log file"));
}

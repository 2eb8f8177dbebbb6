//! Integration tests for the mapscale CLI binary.

use std::path::Path;
use std::process::{Command, Output};

fn mapscale_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mapscale"))
}

fn mapscale_with_config(config_path: &Path) -> Command {
    let mut cmd = mapscale_cmd();
    cmd.arg("--config").arg(config_path);
    cmd
}

fn run(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() {
        panic!(
            "Command failed with status {:?}\nstdout: {stdout}\nstderr: {stderr}",
            output.status
        );
    }
    stdout
}

fn run_failing(cmd: &mut Command) -> Output {
    let output = cmd.output().expect("Failed to execute command");
    assert!(
        !output.status.success(),
        "Command unexpectedly succeeded: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    output
}

#[test]
fn test_resolve_simple_gridset() {
    let out = run(mapscale_cmd()
        .arg("resolve")
        .arg("--gridset")
        .arg("simple:2x5000000")
        .arg("--zoom")
        .arg("(0,0)")
        .arg("--zoom")
        .arg("1,2"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["(0,0)\t3750000\t7500000", "(1,2)\t937500\t3750000"]);
}

#[test]
fn test_resolve_reports_applicability() {
    let out = run(mapscale_cmd()
        .arg("resolve")
        .arg("--gridset")
        .arg("simple:2x5000000@3")
        .arg("--zoom")
        .arg("0")
        .arg("--zoom")
        .arg("3")
        .arg("--scale")
        .arg("40000000"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("\tapplies"), "Got: {}", lines[0]);
    assert!(lines[1].ends_with("\tdoes not apply"), "Got: {}", lines[1]);
}

#[test]
fn test_resolve_json_uses_null_for_open_bound() {
    let out = run(mapscale_cmd()
        .arg("resolve")
        .arg("--zoom")
        .arg("0")
        .arg("--json"));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let first = &value[0];
    assert_eq!(first["zoom"]["min_level"], 0);
    assert!(first["scale"]["max_scale_denominator"].is_null());
    assert!(first["scale"]["min_scale_denominator"].as_f64().unwrap() > 0.0);
    assert!(first.get("applies").is_none());
}

#[test]
fn test_levels_of_default_gridset() {
    let out = run(mapscale_cmd().arg("levels"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].starts_with("0\t559082264.02"), "Got: {}", lines[0]);
    assert!(lines[20].ends_with("\t0"), "Got: {}", lines[20]);
}

#[test]
fn test_levels_of_geometric_gridset() {
    let out = run(mapscale_cmd()
        .arg("levels")
        .arg("--gridset")
        .arg("simple:2x5000000")
        .arg("--from")
        .arg("-1")
        .arg("--to")
        .arg("1"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "-1\t10000000\t7500000",
            "0\t5000000\t3750000",
            "1\t2500000\t1875000",
        ]
    );
}

#[test]
fn test_validate_accepts_decreasing_list() {
    let out = run(mapscale_cmd()
        .arg("validate")
        .arg("--scales")
        .arg("4000,2000,1000")
        .arg("--initial")
        .arg("3"));
    assert_eq!(out.trim(), "valid: 3 levels (3..=5)");
}

#[test]
fn test_validate_rejects_bad_lists() {
    for scales in ["5,5", "5,-1", "5,inf"] {
        let output = run_failing(mapscale_cmd().arg("validate").arg("--scales").arg(scales));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Invalid scale sequence"),
            "scales {scales}: {stderr}"
        );
    }
}

#[test]
fn test_unknown_gridset_fails() {
    let output = run_failing(mapscale_cmd()
        .arg("resolve")
        .arg("--gridset")
        .arg("nowhere")
        .arg("--zoom")
        .arg("1"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown gridset: nowhere"), "Got: {stderr}");
}

#[test]
fn test_reversed_zoom_range_is_rejected() {
    run_failing(mapscale_cmd().arg("resolve").arg("--zoom").arg("(3,1)"));
}

#[test]
fn test_configured_gridset_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[zoom]
default_gridset = "local"

[[gridsets]]
name = "local"
scales = [4000.0, 2000.0, 1000.0]
"#,
    )
    .unwrap();

    let list_out = run(mapscale_with_config(&config_path).arg("gridsets"));
    assert!(list_out.lines().any(|l| l == "* local"), "Got: {list_out}");
    assert!(list_out.lines().any(|l| l == "  EPSG:3857"), "Got: {list_out}");

    let resolve_out = run(mapscale_with_config(&config_path)
        .arg("resolve")
        .arg("--zoom")
        .arg("(1,1)"));
    assert_eq!(resolve_out.trim(), "(1,1)\t1500\t3000");

    let levels_out = run(mapscale_with_config(&config_path).arg("levels"));
    assert_eq!(levels_out.lines().count(), 3);
}

#[test]
fn test_invalid_configured_gridset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[[gridsets]]\nname = \"flat\"\nscales = [5.0, 5.0]\n",
    )
    .unwrap();

    let output = run_failing(mapscale_with_config(&config_path).arg("gridsets"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decreasing"), "Got: {stderr}");
}

#[test]
fn test_unparsable_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[[gridsets]]\nname = \"local\"\nscales = [4000.0,\n").unwrap();

    let output = run_failing(mapscale_with_config(&config_path).arg("gridsets"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "Got: {stderr}");
    assert!(stderr.contains("config.toml"), "Got: {stderr}");
}

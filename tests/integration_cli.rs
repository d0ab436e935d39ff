use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("cluster-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("cluster-cli");
    }

    path
}

#[test]
fn test_cli_impacts_basic() {
    let output = Command::new(get_cli_binary())
        .args([
            "impacts",
            "--speed", "10",
            "--angle", "0",
            "--start-y", "50",
            "--split-time", "1.5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("IMPACT") && stdout.contains("main"),
        "Should contain impact output"
    );
}

#[test]
fn test_cli_impacts_json_output() {
    let output = Command::new(get_cli_binary())
        .args(["impacts", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    assert_eq!(parsed["impacts"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_cli_arcs_csv_output() {
    let output = Command::new(get_cli_binary())
        .args(["arcs", "--step", "0.25", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("arc,x,y"), "Should emit a CSV header");
    assert!(
        stdout.contains("pre_split,") && stdout.contains("minus,"),
        "Should list every arc"
    );
}

#[test]
fn test_cli_sweep_command() {
    let output = Command::new(get_cli_binary())
        .args([
            "sweep",
            "--from", "0.5",
            "--to", "2.5",
            "--steps", "11",
            "--output", "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("num_valid,11"),
        "All sweep candidates should be valid"
    );
}

#[test]
fn test_cli_unreachable_target_fails() {
    let output = Command::new(get_cli_binary())
        .args(["impacts", "--target-elevation", "1000"])
        .output()
        .expect("Failed to execute command");

    assert!(
        !output.status.success(),
        "Unreachable target should exit nonzero"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("target elevation"),
        "Error should name the failure"
    );
}

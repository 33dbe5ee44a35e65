use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "vitrin-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_vitrin-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("degenerate-window"));
}

#[test]
fn cli_runs_all_scenarios_with_csv_report() {
    let exe = env!("CARGO_BIN_EXE_vitrin-tester");
    let output_path = temp_path("csv");
    let status = Command::new(exe)
        .args(["--report", "csv", "--seeds", "1,2", "--iterations", "20", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert_eq!(content.lines().count(), 1 + 8 * 2);
    assert!(content.lines().skip(1).all(|line| line.contains(",true,")));
}

#[test]
fn cli_fails_when_external_catalog_is_broken() {
    let exe = env!("CARGO_BIN_EXE_vitrin-tester");
    let catalog_path = temp_path("catalog");
    std::fs::write(&catalog_path, "{ \"brand\": 1 }").expect("write catalog");
    let output = Command::new(exe)
        .args(["--scenarios", "catalog", "--iterations", "1", "--report", "json", "--catalog"])
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"passed\": false"));
}

#[test]
fn cli_watch_prints_initial_state() {
    let exe = env!("CARGO_BIN_EXE_vitrin-tester");
    let output = Command::new(exe)
        .args(["--watch", "0"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Watching offer"));
    assert!(stdout.contains("01g"));
}

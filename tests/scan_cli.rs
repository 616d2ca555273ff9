use std::{path::Path, process::Command};

fn simscan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_simscan")
}

fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("alpha.txt"),
        "the migration plan covers every rollout stage in detail\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("bravo.txt"),
        "the migration plan covers every rollout stage in detail\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("carol.txt"),
        "unrelated grocery figures, nothing shown here overlaps\n",
    )
    .unwrap();
}

#[test]
fn scan_ranks_identical_pair_first() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.contains("alpha.txt"), "first line: {first}");
    assert!(first.contains("bravo.txt"), "first line: {first}");
    assert!(first.contains("100%"), "first line: {first}");
    assert!(stdout.contains("3 pair(s)"), "stdout: {stdout}");
}

#[test]
fn scan_json_output_is_parseable() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(tmp.path())
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let pairs = value.as_array().unwrap();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0]["rank"], 1);
    assert_eq!(pairs[0]["doc_a"], "alpha.txt");
    assert_eq!(pairs[0]["doc_b"], "bravo.txt");
    assert_eq!(pairs[0]["similarity"], 100.0);
    assert!(!pairs[0]["fragments"].as_array().unwrap().is_empty());
}

#[test]
fn scan_top_limits_pairs() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(tmp.path())
        .args(["--top", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 pair(s)"), "stdout: {stdout}");
    assert!(!stdout.contains("carol.txt"), "stdout: {stdout}");
}

#[test]
fn scan_single_document_reports_no_pairs() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("only.txt"), "a lonely file\n").unwrap();

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No overlapping pairs found."));
}

#[test]
fn scan_missing_folder_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nowhere");

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn scan_writes_html_report() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());
    let html_path = tmp.path().join("report.html");

    let output = Command::new(simscan_bin())
        .arg("scan")
        .arg(tmp.path())
        .arg("--html")
        .arg(&html_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let page = std::fs::read_to_string(&html_path).unwrap();
    assert!(page.contains("<mark>"));
    assert!(page.contains("alpha.txt"));
    assert!(page.contains("100% similarity"));
}

#[test]
fn compare_identical_files_scores_one_hundred() {
    let tmp = tempfile::tempdir().unwrap();
    write_fixture(tmp.path());

    let output = Command::new(simscan_bin())
        .arg("compare")
        .arg(tmp.path().join("alpha.txt"))
        .arg(tmp.path().join("bravo.txt"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("100% similarity"), "stdout: {stdout}");
    assert!(stdout.contains("1 fragment(s)"), "stdout: {stdout}");
}

use tempfile::tempdir;

mod common;
use common::{htmlfuse, write_fixtures, BUNDLED};

#[test]
fn test_json_status_line() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = htmlfuse(dir.path()).arg("--json").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let event: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(event["type"], "bundle_complete");
    assert_eq!(event["output"], "bundle.html");
    assert_eq!(event["bytes"], BUNDLED.len());
    assert_eq!(event["style_inlined"], true);
    assert_eq!(event["script_inlined"], true);
    assert_eq!(event["written"], true);
}

#[test]
fn test_json_dry_run_reports_not_written() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let output = htmlfuse(dir.path())
        .args(["--json", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(event["written"], false);
    assert!(!dir.path().join("bundle.html").exists());
}

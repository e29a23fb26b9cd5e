use std::process::Command;

#[test]
fn test_help_lists_path_flags() {
    let bin = env!("CARGO_BIN_EXE_htmlfuse");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--markup", "--style", "--script", "--output", "--config"] {
        assert!(
            stdout.contains(flag),
            "help output should list {flag}; got:\n{}",
            stdout
        );
    }
}

#[test]
fn test_help_mentions_config_fallback() {
    let bin = env!("CARGO_BIN_EXE_htmlfuse");

    let output = Command::new(bin).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("htmlfuse.toml"),
        "help output should mention the config file fallback; got:\n{}",
        stdout
    );
}

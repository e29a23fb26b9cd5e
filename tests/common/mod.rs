//! Common test utilities for htmlfuse CLI tests.
//!
//! Provides the standard three-file fixture set and a `Command` builder
//! pointed at the compiled binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub const MARKUP: &str = concat!(
    r#"<html><head><link rel="stylesheet" href="style.css"></head>"#,
    r#"<body><script src="script.js"></script></body></html>"#,
);
pub const STYLE: &str = "body{color:red}";
pub const SCRIPT: &str = "console.log(1)";
pub const BUNDLED: &str = concat!(
    "<html><head><style>\nbody{color:red}\n</style></head>",
    "<body><script>\nconsole.log(1)\n</script></body></html>",
);

/// Write the standard fixture files into `dir` under their default names.
pub fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("index.html"), MARKUP).unwrap();
    std::fs::write(dir.join("style.css"), STYLE).unwrap();
    std::fs::write(dir.join("script.js"), SCRIPT).unwrap();
}

/// A `Command` for the htmlfuse binary with `dir` as working directory.
pub fn htmlfuse(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_htmlfuse"));
    cmd.current_dir(dir);
    cmd
}

//! htmlfuse CLI - inline CSS and JavaScript into one HTML file
//!
//! Usage: htmlfuse [OPTIONS]
//!
//! Reads an HTML shell, a stylesheet, and a script, replaces the external
//! references with inline blocks, and writes a single self-contained document.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Every failure becomes one status line, never a panic.
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

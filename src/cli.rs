use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use similar::TextDiff;

use htmlfuse::{BundleConfig, BundleReport, Bundler, FileSystem, LocalFs};

/// htmlfuse - inline CSS and JavaScript into one self-contained HTML file
#[derive(Parser, Debug)]
#[command(name = "htmlfuse")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Paths not given as flags are read from htmlfuse.toml, then defaults.")]
pub struct Cli {
    /// Path to the HTML shell
    #[arg(short, long)]
    pub markup: Option<PathBuf>,

    /// Path to the stylesheet inlined in place of the <link> tag
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Path to the script inlined in place of the <script src> tag
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Where the merged document is written
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file (default: htmlfuse.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be written without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Machine-readable one-line status for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the effective paths: flags override the config file, which
    /// overrides built-in defaults.
    fn resolve_config(&self) -> Result<BundleConfig> {
        let mut config = BundleConfig::load_or_default(self.config.as_deref())?;
        if let Some(markup) = &self.markup {
            config.markup = markup.clone();
        }
        if let Some(style) = &self.style {
            config.style = style.clone();
        }
        if let Some(script) = &self.script {
            config.script = script.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        Ok(config)
    }
}

/// Execute a bundle run from parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let fs = LocalFs::new();
    let bundler = Bundler::new(&fs, &config);

    let report = if cli.dry_run {
        let bundle = bundler.render()?;
        if !cli.json {
            print_diff(&fs, &config, &bundle.content)?;
        }
        bundle.into_report(&config.output, false)
    } else {
        bundler.run()?
    };

    print_status(&report, cli.json, cli.verbose);
    Ok(())
}

/// Unified diff of the current output file (empty if absent) against the
/// freshly rendered document.
fn print_diff(fs: &LocalFs, config: &BundleConfig, rendered: &str) -> Result<()> {
    let current = if fs.exists(&config.output) {
        fs.read_to_string(&config.output)?
    } else {
        String::new()
    };

    let diff = TextDiff::from_lines(current.as_str(), rendered);
    print!(
        "{}",
        diff.unified_diff()
            .context_radius(2)
            .header("current", "bundled")
    );
    Ok(())
}

/// Emit the single status line, plus per-step detail when verbose.
fn print_status(report: &BundleReport, json: bool, verbose: u8) {
    if json {
        // BundleReport only holds plain fields; serialization cannot fail.
        let mut value = serde_json::to_value(report).unwrap_or_default();
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("type".into(), "bundle_complete".into());
        }
        println!("{value}");
        return;
    }

    if verbose > 0 {
        let style = if report.style_inlined {
            "inlined"
        } else {
            "marker not found, markup unchanged"
        };
        let script = if report.script_inlined {
            "inlined"
        } else {
            "marker not found, markup unchanged"
        };
        println!("Stylesheet: {style}");
        println!("Script: {script}");
        println!("Output size: {} bytes", report.bytes);
    }

    if report.written {
        println!("Successfully created '{}'", report.output.display());
    } else {
        println!("Dry run - would create '{}'", report.output.display());
    }
}

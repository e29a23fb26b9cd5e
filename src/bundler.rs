//! Core substitution engine
//!
//! Reads the three source assets, replaces the stylesheet and script
//! references in the markup with inline blocks, and writes the merged
//! document. Replacement is exact-substring substitution, first occurrence
//! only. An absent marker leaves the markup untouched for that step; that is
//! accepted behavior, not an error.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::BundleConfig;
use crate::error::BundleResult;
use crate::fs::FileSystem;

/// Stylesheet reference replaced by an inline `<style>` block
pub const STYLE_MARKER: &str = r#"<link rel="stylesheet" href="style.css">"#;

/// Script reference replaced by an inline `<script>` block
pub const SCRIPT_MARKER: &str = r#"<script src="script.js"></script>"#;

/// A rendered document that has not been written yet
#[derive(Debug, Clone)]
pub struct Bundle {
    /// The merged markup
    pub content: String,
    /// Whether the stylesheet marker was found and replaced
    pub style_inlined: bool,
    /// Whether the script marker was found and replaced
    pub script_inlined: bool,
}

impl Bundle {
    /// Build the per-run report for a bundle destined for `output`.
    pub fn into_report(self, output: &Path, written: bool) -> BundleReport {
        BundleReport {
            output: output.to_path_buf(),
            bytes: self.content.len(),
            style_inlined: self.style_inlined,
            script_inlined: self.script_inlined,
            written,
        }
    }
}

/// Outcome of a bundle run
#[derive(Debug, Clone, Serialize)]
pub struct BundleReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub style_inlined: bool,
    pub script_inlined: bool,
    pub written: bool,
}

/// Drives read, substitute, write over an abstract file system
pub struct Bundler<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a BundleConfig,
}

impl<'a, F: FileSystem> Bundler<'a, F> {
    pub fn new(fs: &'a F, config: &'a BundleConfig) -> Self {
        Self { fs, config }
    }

    /// Read the three inputs and produce the merged document without writing.
    ///
    /// Fails on the first unreadable input; nothing is written in that case.
    pub fn render(&self) -> BundleResult<Bundle> {
        let markup = self.fs.read_to_string(&self.config.markup)?;
        let style = self.fs.read_to_string(&self.config.style)?;
        let script = self.fs.read_to_string(&self.config.script)?;

        let style_inlined = markup.contains(STYLE_MARKER);
        let script_inlined = markup.contains(SCRIPT_MARKER);
        let content = inline_assets(&markup, &style, &script);

        Ok(Bundle {
            content,
            style_inlined,
            script_inlined,
        })
    }

    /// Full run: render, then write the output file create-or-overwrite.
    pub fn run(&self) -> BundleResult<BundleReport> {
        let bundle = self.render()?;
        self.fs.write_atomic(&self.config.output, &bundle.content)?;
        Ok(bundle.into_report(&self.config.output, true))
    }
}

/// Replace the first occurrence of each marker with an inline block.
///
/// Markers are matched case- and whitespace-sensitively. A marker that does
/// not occur leaves the markup unchanged for that step.
pub fn inline_assets(markup: &str, style: &str, script: &str) -> String {
    let merged = replace_first(markup, STYLE_MARKER, &inline_block("style", style));
    replace_first(&merged, SCRIPT_MARKER, &inline_block("script", script))
}

fn inline_block(tag: &str, content: &str) -> String {
    format!("<{tag}>\n{content}\n</{tag}>")
}

fn replace_first(text: &str, marker: &str, replacement: &str) -> String {
    text.replacen(marker, replacement, 1)
}

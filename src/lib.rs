//! htmlfuse - single-file HTML bundler
//!
//! htmlfuse reads an HTML shell, a stylesheet, and a script, replaces the
//! external references in the markup with inline `<style>` and `<script>`
//! blocks, and writes one self-contained HTML document. Replacement is
//! literal substring substitution, not markup parsing.

pub mod bundler;
pub mod config;
pub mod error;
pub mod fs;

// Re-exports for convenience
pub use bundler::{inline_assets, Bundle, BundleReport, Bundler, SCRIPT_MARKER, STYLE_MARKER};
pub use config::BundleConfig;
pub use error::{BundleError, BundleResult};
pub use fs::{FileSystem, LocalFs};

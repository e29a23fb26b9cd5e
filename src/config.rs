//! Configuration module for htmlfuse
//!
//! The four paths a bundle run touches, resolved in priority order:
//! 1. CLI flags (highest priority)
//! 2. TOML config file (`htmlfuse.toml` in the working directory, or `--config`)
//! 3. Built-in defaults (lowest priority)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BundleError, BundleResult};

/// Config file name looked up in the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "htmlfuse.toml";

/// The four paths a bundle run touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// HTML shell containing the link and script markers
    pub markup: PathBuf,

    /// Stylesheet inlined in place of the `<link>` tag
    pub style: PathBuf,

    /// Script inlined in place of the `<script src>` tag
    pub script: PathBuf,

    /// Where the merged document is written
    pub output: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            markup: PathBuf::from("index.html"),
            style: PathBuf::from("style.css"),
            script: PathBuf::from("script.js"),
            output: PathBuf::from("bundle.html"),
        }
    }
}

impl BundleConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BundleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => BundleError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => BundleError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        toml::from_str(&text).map_err(|e| BundleError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load an explicit config file, or `htmlfuse.toml` from the working
    /// directory if present, or fall back to built-in defaults.
    ///
    /// A missing explicit file is an error; a missing implicit one is not.
    pub fn load_or_default(explicit: Option<&Path>) -> BundleResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = Path::new(CONFIG_FILE);
                if candidate.exists() {
                    Self::load(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

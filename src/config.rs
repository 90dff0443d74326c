//! User configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::MAX_FRACTION_DIGITS;

const APP_DIR: &str = "countonme";
const CONFIG_FILE: &str = "config.toml";

/// Front-end preferences. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fractional digits shown in results, at most five.
    pub max_fraction_digits: usize,
    /// Copy every successful result to the clipboard.
    pub copy_results: bool,
    /// Print display updates as JSON lines instead of plain text.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fraction_digits: MAX_FRACTION_DIGITS,
            copy_results: false,
            json: false,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text).context("Invalid configuration")?;
        if config.max_fraction_digits > MAX_FRACTION_DIGITS {
            tracing::warn!(
                requested = config.max_fraction_digits,
                max = MAX_FRACTION_DIGITS,
                "max_fraction_digits too large, clamping"
            );
            config.max_fraction_digits = MAX_FRACTION_DIGITS;
        }
        Ok(config)
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Failed to load {}", path.display()))
    }
}

/// `$XDG_CONFIG_HOME/countonme/config.toml`, if a config directory exists.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

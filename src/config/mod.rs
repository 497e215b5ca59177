//! Configuration for the jsonnav command-line tool.
//!
//! Configuration is read from `~/.config/jsonnav/config.toml`. Every field has
//! a default, so a missing, unreadable or partial file is never an error.
//!
//! # Example
//!
//! ```
//! use jsonnav::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.path_cache_capacity, 256);
//! assert_eq!(config.log_filter, "warn");
//!
//! let custom = Config {
//!     pretty_output: false,
//!     ..Config::default()
//! };
//! assert!(!custom.pretty_output);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for jsonnav.
///
/// * `path_cache_capacity` - Parsed paths kept in the shared cache; 0 disables it (default: 256)
/// * `log_filter` - `tracing` filter used when `RUST_LOG` is unset (default: "warn")
/// * `pretty_output` - Pretty-print JSON results (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Parsed paths kept in the shared cache
    #[serde(default = "default_path_cache_capacity")]
    pub path_cache_capacity: usize,

    /// Log filter directive, e.g. "warn" or "jsonnav=trace"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Pretty-print JSON results
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

fn default_path_cache_capacity() -> usize {
    256
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_pretty_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_cache_capacity: default_path_cache_capacity(),
            log_filter: default_log_filter(),
            pretty_output: default_pretty_output(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonnav/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonnav");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

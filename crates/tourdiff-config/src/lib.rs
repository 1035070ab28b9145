//! Configuration system for tourdiff.
//!
//! Load decomposition configuration from TOML or YAML files to control
//! junction splitting, residual filtering and verification without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tourdiff_config::{AssertMode, DecomposeConfig};
//!
//! let config = DecomposeConfig::from_toml_str(r#"
//!     split_junctions = true
//!     parallel_islands = true
//!     assert_mode = "full"
//! "#).unwrap();
//!
//! assert!(config.parallel_islands);
//! assert_eq!(config.assert_mode, AssertMode::Full);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tourdiff_config::DecomposeConfig;
//!
//! let config = DecomposeConfig::load("tourdiff.toml").unwrap_or_default();
//! assert!(config.split_junctions);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Decomposition configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct DecomposeConfig {
    /// Split islands at junctions into smaller disjoint moves.
    pub split_junctions: bool,

    /// Keep a residual move even when junction splitting consumed all of its edges.
    pub keep_empty_residuals: bool,

    /// Split islands on the rayon thread pool.
    pub parallel_islands: bool,

    /// How much of the output is re-verified before it is returned.
    pub assert_mode: AssertMode,
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            split_junctions: true,
            keep_empty_residuals: false,
            parallel_islands: false,
            assert_mode: AssertMode::Fast,
        }
    }
}

impl DecomposeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML; `.toml` and extensionless files as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") | None => Self::from_toml_file(path),
            Some(other) => Err(ConfigError::Invalid(format!(
                "unsupported config file extension: .{other}"
            ))),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Enables or disables junction splitting.
    pub fn with_split_junctions(mut self, split: bool) -> Self {
        self.split_junctions = split;
        self
    }

    /// Keeps or drops empty residual moves.
    pub fn with_keep_empty_residuals(mut self, keep: bool) -> Self {
        self.keep_empty_residuals = keep;
        self
    }

    /// Enables or disables parallel island splitting.
    pub fn with_parallel_islands(mut self, parallel: bool) -> Self {
        self.parallel_islands = parallel;
        self
    }

    /// Sets the assertion mode.
    pub fn with_assert_mode(mut self, mode: AssertMode) -> Self {
        self.assert_mode = mode;
        self
    }

    /// Returns true if the final moves are re-verified against the difference.
    pub fn full_assert(&self) -> bool {
        self.assert_mode == AssertMode::Full
    }
}

/// Assertion mode affecting how much of the output is re-checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertMode {
    /// Checks the degree, size and balance invariants as they are computed.
    #[default]
    Fast,

    /// Additionally verifies that the final moves partition the difference.
    Full,
}

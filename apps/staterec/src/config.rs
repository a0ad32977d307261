//! # Configuration
//!
//! Optional TOML configuration for the console.
//!
//! ```toml
//! [registry]
//! duplicates = "reject"
//!
//! [console]
//! banner = false
//! json_mode = true
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos do not pass
//! silently. Command-line flags are applied on top of the loaded file.

use serde::{Deserialize, Serialize};
use staterec_core::{DuplicatePolicy, StateError};
use std::path::Path;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "staterec.toml";

/// Complete staterec configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Treatment of repeated identifiers on create.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Print the startup banner.
    #[serde(default = "default_banner")]
    pub banner: bool,
    /// Print listings as a JSON array instead of description lines.
    #[serde(default)]
    pub json_mode: bool,
}

fn default_banner() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            json_mode: false,
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, StateError> {
        toml::from_str(contents).map_err(|e| StateError::ConfigError(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StateError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, `DEFAULT_CONFIG_FILE` in
    /// `dir` is loaded when present, and built-in defaults are used otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self, StateError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::load(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = %fallback.display(), "loading default configuration file");
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

//! Parsing and discovery for the optional `.fizztool.yaml` configuration file
//!
//! Configuration is best-effort. A missing, unreadable or malformed file is
//! logged and ignored so that flags and environment variables still apply.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the home directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = ".fizztool.yaml";

/// Contents of a fizztool configuration file
///
/// Values are kept as a plain YAML mapping. No command reads them yet; the
/// file is loaded so that its presence is reported and malformed files are
/// noticed in debug logs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: Mapping,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a YAML string
    ///
    /// An empty document yields the default configuration.
    pub fn parse(s: &str) -> Result<Self, serde_yaml_ng::Error> {
        let value: Value = serde_yaml_ng::from_str(s)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_value(value)
    }

    /// Look up a top-level value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A configuration together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedConfig {
    /// Path of the file that was read, if any
    pub path: Option<PathBuf>,
    pub config: Config,
}

/// Get the user's home directory from the environment
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Pick the configuration file to read
///
/// An explicit path wins; otherwise `<home>/.fizztool.yaml` is used when a
/// home directory is known.
pub fn config_path(explicit: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Some(path.to_path_buf()),
        _ => home.map(|home| home.join(DEFAULT_CONFIG_FILE)),
    }
}

/// Load configuration without ever failing
///
/// Errors are logged at debug level and produce an empty configuration.
pub fn load_best_effort(explicit: Option<&Path>, home: Option<&Path>) -> LoadedConfig {
    let Some(path) = config_path(explicit, home) else {
        tracing::debug!("no config file path and no home directory; skipping config");
        return LoadedConfig::default();
    };

    match Config::load(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            LoadedConfig {
                path: Some(path),
                config,
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "ignoring config file");
            LoadedConfig::default()
        }
    }
}

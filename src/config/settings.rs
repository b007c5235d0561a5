//! Resolved runtime settings
//!
//! Parsed flags are turned into one explicit value handed to the command
//! handlers. The config file is loaded separately and never changes these.

/// Effective settings for a single invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Key to query with `get`; empty means "show help"
    pub key: String,
}

impl Settings {
    /// Build settings from the parsed `--key` value
    ///
    /// `flag_key` already reflects `--key` or the `KEY` environment variable.
    pub fn resolve(flag_key: Option<&str>) -> Self {
        Self {
            key: flag_key.unwrap_or_default().to_string(),
        }
    }
}

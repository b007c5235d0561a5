#![forbid(unsafe_code)]

//! fizztool: a mock key-value lookup tool for test scenarios
//!
//! `fizztool get --key fizz` emits `{"fizz": "buzz"}` on stdout; any other key
//! is an error on stderr. `fizztool version` reports build metadata.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod output;
pub mod types;
pub mod version;

// Re-export error types for convenient access
pub use error::{ConfigError, FizzError, LookupError};

// Re-export core domain types for convenient access
pub use lookup::{FizzRecord, LookupRequest, LookupResult, lookup};
pub use types::{BuildInfo, Platform};
pub use version::VersionInfo;

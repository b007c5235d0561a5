#![forbid(unsafe_code)]

//! Core domain types for fizztool
//!
//! Build metadata and the host platform are explicit values passed into the
//! command handlers instead of being read from globals.

use std::fmt;

/// Base name of the executable
pub const PROGRAM_NAME: &str = "fizztool";

/// Copyright line included in the `get` notice
pub const COPYRIGHT: &str = "(c) 2023 Tailspin Toys, Ltd.";

/// Fallback values used when the build does not inject metadata
pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_COMMIT: &str = "none";
pub const DEFAULT_DATE: &str = "unknown";

/// Raw build metadata as injected at compile time
///
/// Values are stored exactly as supplied; cleanup happens when a
/// [`VersionInfo`](crate::version::VersionInfo) is derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl BuildInfo {
    /// Creates build metadata from explicit values
    pub fn new(
        version: impl Into<String>,
        commit: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
            date: date.into(),
        }
    }

    /// Build metadata baked in from `FIZZTOOL_VERSION`, `FIZZTOOL_COMMIT`
    /// and `FIZZTOOL_DATE` at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("FIZZTOOL_VERSION").unwrap_or(DEFAULT_VERSION),
            option_env!("FIZZTOOL_COMMIT").unwrap_or(DEFAULT_COMMIT),
            option_env!("FIZZTOOL_DATE").unwrap_or(DEFAULT_DATE),
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_COMMIT, DEFAULT_DATE)
    }
}

/// Host platform details that affect displayed names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    exe_suffix: &'static str,
}

impl Platform {
    /// Platform with an explicit executable suffix (e.g. `".exe"`)
    pub const fn new(exe_suffix: &'static str) -> Self {
        Self { exe_suffix }
    }

    /// The platform this binary was compiled for
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::new(".exe")
        } else {
            Self::new("")
        }
    }

    pub fn exe_suffix(&self) -> &'static str {
        self.exe_suffix
    }

    /// Program name as the user would invoke it on this platform
    pub fn command_name(&self) -> String {
        format!("{}{}", PROGRAM_NAME, self.exe_suffix)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

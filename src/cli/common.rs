//! Common helpers shared across CLI commands
//!
//! This module provides the invocation context handed to each command and
//! the best-effort configuration loading done before dispatch.

use crate::cli::args::{ColorChoice, root_help};
use crate::config::{self, LoadedConfig};
use crate::types::{BuildInfo, COPYRIGHT, Platform};
use crate::version::clean_version;
use std::io::{IsTerminal, Write};
use std::path::Path;
use termcolor::StandardStream;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Everything a command handler needs besides its own arguments
#[derive(Debug, Clone)]
pub struct Context {
    pub build: BuildInfo,
    pub platform: Platform,
    pub color: ColorChoice,
}

impl Context {
    pub fn new(build: BuildInfo, platform: Platform, color: ColorChoice) -> Self {
        Self {
            build,
            platform,
            color,
        }
    }

    /// Context for this binary: compile-time build info on the host platform
    pub fn for_host(color: ColorChoice) -> Self {
        Self::new(BuildInfo::from_build_env(), Platform::host(), color)
    }

    /// Color-aware handle to stdout
    pub fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color.resolve(std::io::stdout().is_terminal()))
    }

    /// License notice written to stderr by `get`, e.g.
    /// `fizztool v1.2.3 (c) 2023 Tailspin Toys, Ltd.`
    ///
    /// The version is cleaned first, so a `v1.2.3` build never shows `vv1.2.3`.
    pub fn notice(&self) -> String {
        format!(
            "{} v{} {}",
            self.platform.command_name(),
            clean_version(&self.build.version),
            COPYRIGHT
        )
    }
}

/// Load the configuration file, announcing it on stderr when one is used
///
/// Never fails: see [`config::load_best_effort`].
pub fn load_config(explicit: Option<&Path>) -> LoadedConfig {
    let home = config::fizztool_yaml::home_dir();
    let loaded = config::load_best_effort(explicit, home.as_deref());

    if let Some(path) = &loaded.path {
        eprintln!("Using config file: {}", path.display());
    }

    loaded
}

/// Print the top-level help to stdout, as running `fizztool` alone does
pub fn run_root_help() -> i32 {
    let mut stdout = std::io::stdout().lock();
    match write!(stdout, "{}", root_help()).and_then(|_| stdout.flush()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

//! Test utilities for fizztool integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// An isolated environment for running the binary
///
/// `HOME` points at an empty temporary directory, and `KEY`/`RUST_LOG` are
/// cleared so the host environment cannot leak into assertions.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    /// A `fizztool` command bound to this sandbox
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("fizztool").unwrap();
        cmd.env("HOME", self.home.path())
            .env_remove("USERPROFILE")
            .env_remove("KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `$HOME/.fizztool.yaml`
    pub fn write_home_config(&self, contents: &str) -> PathBuf {
        self.write_file(".fizztool.yaml", contents)
    }

    /// Write an arbitrary file inside the sandbox
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

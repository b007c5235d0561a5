//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod get;
pub mod version;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command};
pub use common::Context;

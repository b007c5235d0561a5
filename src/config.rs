//! Configuration file parsing and settings resolution

pub mod fizztool_yaml;
pub mod settings;

pub use fizztool_yaml::{Config, DEFAULT_CONFIG_FILE, LoadedConfig, load_best_effort};
pub use settings::Settings;

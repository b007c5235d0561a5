//! Output formatters

pub mod json;

pub use json::{JsonColors, JsonFormatter};

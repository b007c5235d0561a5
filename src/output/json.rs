#![forbid(unsafe_code)]

//! Pretty JSON output with optional jq-style colors
//!
//! Layout matches `serde_json::to_string_pretty` (two-space indentation,
//! `"key": value`), followed by a trailing newline. Colors are applied
//! through a [`WriteColor`] sink, so a sink without color support produces
//! plain text.

use crate::error::FizzError;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use termcolor::{Color, ColorSpec, WriteColor};

const INDENT: &str = "  ";

/// Colors for each kind of JSON token
#[derive(Debug, Clone)]
pub struct JsonColors {
    pub key: ColorSpec,
    pub string: ColorSpec,
    pub number: ColorSpec,
    pub boolean: ColorSpec,
    pub null: ColorSpec,
}

impl Default for JsonColors {
    fn default() -> Self {
        let mut key = ColorSpec::new();
        key.set_fg(Some(Color::Blue)).set_bold(true);

        let mut string = ColorSpec::new();
        string.set_fg(Some(Color::Green));

        let mut number = ColorSpec::new();
        number.set_fg(Some(Color::Cyan));

        let mut boolean = ColorSpec::new();
        boolean.set_fg(Some(Color::Yellow));

        let mut null = ColorSpec::new();
        null.set_dimmed(true);

        Self {
            key,
            string,
            number,
            boolean,
            null,
        }
    }
}

/// Pretty JSON formatter
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    colors: JsonColors,
}

impl JsonFormatter {
    /// Create a formatter with the default color scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` as indented JSON followed by a newline
    pub fn write<T, W>(&self, out: &mut W, value: &T) -> Result<(), FizzError>
    where
        T: Serialize + ?Sized,
        W: WriteColor + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.write_value(out, &value, 0)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn write_value<W>(&self, out: &mut W, value: &Value, depth: usize) -> Result<(), FizzError>
    where
        W: WriteColor + ?Sized,
    {
        match value {
            Value::Null => write_colored(out, &self.colors.null, "null")?,
            Value::Bool(b) => write_colored(out, &self.colors.boolean, &b.to_string())?,
            Value::Number(n) => write_colored(out, &self.colors.number, &n.to_string())?,
            Value::String(s) => {
                write_colored(out, &self.colors.string, &serde_json::to_string(s)?)?
            }
            Value::Array(items) => {
                if items.is_empty() {
                    write!(out, "[]")?;
                    return Ok(());
                }
                writeln!(out, "[")?;
                for (i, item) in items.iter().enumerate() {
                    write_indent(out, depth + 1)?;
                    self.write_value(out, item, depth + 1)?;
                    if i + 1 < items.len() {
                        write!(out, ",")?;
                    }
                    writeln!(out)?;
                }
                write_indent(out, depth)?;
                write!(out, "]")?;
            }
            Value::Object(map) => {
                if map.is_empty() {
                    write!(out, "{{}}")?;
                    return Ok(());
                }
                writeln!(out, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    write_indent(out, depth + 1)?;
                    write_colored(out, &self.colors.key, &serde_json::to_string(key)?)?;
                    write!(out, ": ")?;
                    self.write_value(out, item, depth + 1)?;
                    if i + 1 < map.len() {
                        write!(out, ",")?;
                    }
                    writeln!(out)?;
                }
                write_indent(out, depth)?;
                write!(out, "}}")?;
            }
        }
        Ok(())
    }
}

fn write_indent<W: WriteColor + ?Sized>(out: &mut W, depth: usize) -> std::io::Result<()> {
    for _ in 0..depth {
        out.write_all(INDENT.as_bytes())?;
    }
    Ok(())
}

fn write_colored<W: WriteColor + ?Sized>(
    out: &mut W,
    spec: &ColorSpec,
    text: &str,
) -> std::io::Result<()> {
    out.set_color(spec)?;
    out.write_all(text.as_bytes())?;
    out.reset()
}

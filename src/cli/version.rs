//! Version command implementation
//!
//! Emits the extended version information as JSON, or `<name> - v<version>`
//! with `--one-line`.

use crate::cli::common::{Context, EXIT_FAILURE, EXIT_SUCCESS};
use crate::error::FizzError;
use crate::output::JsonFormatter;
use crate::version::VersionInfo;
use std::io::Write;
use termcolor::WriteColor;

/// Run the version command
///
/// Only fails if stdout cannot be written.
pub fn run_version(ctx: &Context, one_line: bool) -> i32 {
    let mut stdout = ctx.stdout();

    match run_version_inner(ctx, one_line, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Internal implementation of version command
pub fn run_version_inner(
    ctx: &Context,
    one_line: bool,
    out: &mut dyn WriteColor,
) -> Result<(), FizzError> {
    let info = VersionInfo::new(&ctx.build, ctx.platform);

    if one_line {
        writeln!(out, "{}", info.one_line())?;
        out.flush()?;
    } else {
        JsonFormatter::new().write(out, &info)?;
    }

    Ok(())
}

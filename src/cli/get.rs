//! Get command implementation
//!
//! This module implements the `fizztool get` command, which:
//! - Shows the command help when no key is given
//! - Writes the license notice to stderr
//! - Writes `{"fizz": "buzz"}` to stdout for the key `fizz`
//! - Fails with `key not found: <key>` for anything else

use crate::cli::args::subcommand_help;
use crate::cli::common::{Context, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::Settings;
use crate::error::FizzError;
use crate::lookup::LookupRequest;
use crate::output::JsonFormatter;
use std::io::Write;
use termcolor::WriteColor;

/// What the get command ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetOutcome {
    /// No key was given, so help was shown
    Help,
    /// The key was found and its record written
    Found,
}

/// Run the get command
///
/// # Returns
///
/// Exit code:
/// - 0: Record written or help shown
/// - 1: Key not found or output failure
pub fn run_get(ctx: &Context, settings: &Settings) -> i32 {
    let mut stdout = ctx.stdout();
    let mut stderr = std::io::stderr().lock();

    match run_get_inner(ctx, settings, &mut stdout, &mut stderr) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(stderr, "Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Internal implementation of get command, writing to the given streams
pub fn run_get_inner(
    ctx: &Context,
    settings: &Settings,
    out: &mut dyn WriteColor,
    err: &mut dyn Write,
) -> Result<GetOutcome, FizzError> {
    if settings.key.is_empty() {
        write!(out, "{}", subcommand_help("get"))?;
        out.flush()?;
        return Ok(GetOutcome::Help);
    }

    writeln!(err, "{}", ctx.notice())?;

    let record = LookupRequest::new(settings.key.as_str()).resolve()?;
    tracing::debug!(key = %settings.key, "key found");

    JsonFormatter::new().write(out, &record)?;
    Ok(GetOutcome::Found)
}

//! CLI argument parsing using clap

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "A small app for emitting output for test scenarios.";

const LONG_ABOUT: &str = "\
fizztool is a small application that emits output for test scenarios.

When you use the 'get' command, fizztool:

- Writes informational messages, such as banner text, progress, etc. to stderr
- Writes error messages to stderr
  - Error messages should be easily distinguished from informational messages
    and banner text
- Writes successful output to stdout
  - Success output should be a JSON object containing simple key-value pairs";

const GET_LONG_ABOUT: &str = "\
Retrieve a key from the data store by name.

When you use this command, it always emits a license header with the name of
the application, its version, and the copyright notice to stderr.

If you pass the '--key' flag with 'fizz' as the value, it emits a JSON blob to
stdout.

If you pass any other value for '--key', it emits an error message reporting
that the key is invalid to stderr.

You can only retrieve one key at a time.";

const VERSION_LONG_ABOUT: &str = "\
Display the extended version information for fizztool.

By default, this command emits a JSON blob to stdout that includes:

- The application name.
- The version.
- The commit SHA this version was built on.
- The date this version was built.
- The URL to this version's release notes.

You can use the '--one-line' flag to emit a shorter string output,
which only includes the name and version separated by a dash wrapped in
spaces.";

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color JSON output when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Decide the termcolor choice for a stream
    pub fn resolve(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto | ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Always => termcolor::ColorChoice::Always,
        }
    }
}

/// fizztool CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "fizztool")]
#[command(about = ABOUT, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Subcommand to execute; without one, help is shown
    #[command(subcommand)]
    pub command: Option<Command>,

    /// config file (default is $HOME/.fizztool.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available fizztool subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve a key from the data store.
    #[command(long_about = GET_LONG_ABOUT)]
    Get {
        /// the key to fizz
        #[arg(short, long, env = "KEY")]
        key: Option<String>,
    },

    /// Display the extended version information for fizztool.
    #[command(long_about = VERSION_LONG_ABOUT)]
    Version {
        /// Return short version on one line
        #[arg(long)]
        one_line: bool,
    },
}

/// Render the long help for the top-level command
pub fn root_help() -> String {
    Cli::command().render_long_help().to_string()
}

/// Render the long help for a subcommand, as `fizztool <name> --help` would
pub fn subcommand_help(name: &str) -> String {
    let mut command = Cli::command();
    command.build();

    match command.find_subcommand_mut(name) {
        Some(subcommand) => subcommand.render_long_help().to_string(),
        None => command.render_long_help().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        // Verify that the CLI struct is properly configured
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_with_key() {
        let cli = Cli::parse_from(["fizztool", "get", "--key", "fizz"]);
        match cli.command {
            Some(Command::Get { key }) => assert_eq!(key.as_deref(), Some("fizz")),
            _ => panic!("Expected Get command"),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_get_short_key() {
        let cli = Cli::parse_from(["fizztool", "get", "-k", "buzz"]);
        match cli.command {
            Some(Command::Get { key }) => assert_eq!(key.as_deref(), Some("buzz")),
            _ => panic!("Expected Get command"),
        }
    }

    #[test]
    fn test_version_default() {
        let cli = Cli::parse_from(["fizztool", "version"]);
        match cli.command {
            Some(Command::Version { one_line }) => assert!(!one_line),
            _ => panic!("Expected Version command"),
        }
    }

    #[test]
    fn test_version_one_line() {
        let cli = Cli::parse_from(["fizztool", "version", "--one-line"]);
        match cli.command {
            Some(Command::Version { one_line }) => assert!(one_line),
            _ => panic!("Expected Version command"),
        }
    }

    #[test]
    fn test_global_config_before_and_after_subcommand() {
        let cli = Cli::parse_from(["fizztool", "--config", "a.yaml", "version"]);
        assert_eq!(cli.config, Some(PathBuf::from("a.yaml")));

        let cli = Cli::parse_from(["fizztool", "version", "--config", "b.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("b.yaml")));
    }

    #[test]
    fn test_color_flag() {
        let cli = Cli::parse_from(["fizztool", "--color", "never", "version"]);
        assert_eq!(cli.color, ColorChoice::Never);

        let cli = Cli::parse_from(["fizztool", "get", "--color", "always"]);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["fizztool", "put"]).is_err());
    }

    #[test]
    fn test_missing_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["fizztool"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_root_help_lists_subcommands() {
        let help = root_help();
        assert!(help.contains("fizztool is a small application"));
        assert!(help.contains("get"));
        assert!(help.contains("version"));
    }

    #[test]
    fn test_color_resolution() {
        use termcolor::ColorChoice as Term;

        assert_eq!(ColorChoice::Auto.resolve(true), Term::Auto);
        assert_eq!(ColorChoice::Auto.resolve(false), Term::Never);
        assert_eq!(ColorChoice::Always.resolve(false), Term::Always);
        assert_eq!(ColorChoice::Never.resolve(true), Term::Never);
    }

    #[test]
    fn test_get_help_mentions_key_flag() {
        let help = subcommand_help("get");
        assert!(help.contains("Retrieve a key from the data store by name."));
        assert!(help.contains("--key"));
        assert!(help.contains("Usage:"));
    }
}

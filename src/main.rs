//! fizztool CLI entry point

use clap::Parser;
use fizztool::cli::{Cli, Command, Context, common};
use fizztool::config::Settings;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr, filtered by RUST_LOG (errors only by default)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        process::exit(common::run_root_help());
    };

    common::load_config(cli.config.as_deref());
    let ctx = Context::for_host(cli.color);

    let exit_code = match command {
        Command::Get { key } => {
            let settings = Settings::resolve(key.as_deref());
            fizztool::cli::get::run_get(&ctx, &settings)
        }
        Command::Version { one_line } => fizztool::cli::version::run_version(&ctx, one_line),
    };

    process::exit(exit_code);
}

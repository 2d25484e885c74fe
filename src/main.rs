//! Toolkit - security and maintenance tool installer
//!
//! Resolves a tool manifest (remote, local, or built-in), lets the user pick
//! tools, and downloads and installs each one in turn.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod batch;
mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod fetcher;
mod invoker;
mod locator;
mod path_utils;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "warn,toolkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    Ok(Settings::load(cli.config.as_deref())?.with_overrides(cli.overrides()))
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = cli.command {
        return commands::completions::run(args);
    }

    let settings = load_settings(&cli)?;
    match cli.command {
        Commands::Install(args) => commands::install::run(&settings, args),
        Commands::List(args) => commands::list::run(&settings, args),
        Commands::Show(args) => commands::show::run(&settings, args),
        Commands::Version => commands::version::run(&settings),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! CLI entry point.
//!
//! Builds the location cache for the requested application name and routes
//! the parsed command to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use stdloc_cli::{Cli, Commands, handlers};
use stdloc_core::Locations;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let overrides = cli.overrides();
    let mut locations = Locations::new(&cli.app_name);
    tracing::debug!(app_name = %cli.app_name, ?overrides, "Resolving locations");

    let result = match command {
        Commands::Paths { json } => handlers::paths::execute(&mut locations, &overrides, json),
        Commands::Init => handlers::init::execute(&mut locations, &overrides),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let code = u8::try_from(e.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}

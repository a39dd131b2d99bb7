//! # carbon.txt validator
//!
//! Command line entry point: validates carbon.txt files by domain, URL or
//! local path, and serves the validation API.

mod bootstrap;
mod cli;
mod commands;
mod di;
mod server;

use clap::Parser;
use cli::{Cli, Command};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if let Command::Schema = cli.command {
        return commands::run_schema();
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        http_timeout_secs = config.http.timeout_secs,
        max_delegation_hops = config.resolver.max_delegation_hops,
        "Configuration loaded"
    );

    let services = di::Services::build(&config).await?;

    match cli.command {
        Command::Validate(target) => commands::run_validate(&services.validator, target).await,
        Command::Resolve { target, output } => {
            commands::run_resolve(&services.finder, &target, output).await
        }
        Command::Plugins => commands::run_plugins(&services.validator),
        Command::Schema => commands::run_schema(),
        Command::Serve { .. } => commands::run_serve(services.validator, &config.server).await,
    }
}

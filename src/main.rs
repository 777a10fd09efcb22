use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_cronexpr::cli::{self, Cli};
use a3s_cronexpr::config::CliConfig;

fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI first so the config file can supply the log level
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let ok = cli::run(&cli, &config)?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

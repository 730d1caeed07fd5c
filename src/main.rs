// file: src/main.rs
// version: 1.0.0
// guid: 037e9d92-3d34-4d9c-b0ab-87cdc946a33a

//! compose-ctl - Main entry point

use anyhow::Context;
use clap::Parser;
use compose_ctl::{cli::Cli, config::Config, logging::logger, reporter, Dispatcher};
use std::process::ExitCode;
use tokio::signal;
use tracing::warn;

/// Exit code for usage and setup errors, matching clap
const EXIT_USAGE: u8 = 2;

/// Standard exit code for Ctrl+C
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if cli.dry_run {
        config.safety.dry_run = true;
    }

    logger::init_logger(cli.verbose, cli.quiet, &config.logging)
        .context("Failed to initialize logging")?;

    let dispatcher = Dispatcher::new(&config);

    // The child is spawned with kill_on_drop, so losing this race also
    // tears down a running `logs -f`.
    let outcome = tokio::select! {
        result = dispatcher.dispatch(cli.action) => result?,
        _ = signal::ctrl_c() => {
            warn!("Interrupted by user");
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
    };

    reporter::report(&outcome);
    Ok(ExitCode::from(exit_byte(outcome.process_exit_code())))
}

/// Clamp a child exit code into the range a process can return
fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

// file: src/cli/args.rs
// version: 1.1.0
// guid: c6fd25ad-024e-4c8d-9de1-2678de99d23b

//! Command line argument definitions

use crate::action::Action;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compose-ctl")]
#[command(about = "Start, stop, and inspect the LiteLLM debug stack via docker-compose")]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Action to run against the compose file
    #[arg(value_enum)]
    pub action: Action,

    /// Settings file to use instead of the user and project files
    #[arg(short, long, env = "COMPOSE_CTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the compose command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

// file: src/dispatcher.rs
// version: 1.1.0
// guid: ddd06b0d-1cde-44cc-b6dd-1e9f58c308ed

//! Maps a validated action onto a single compose invocation and waits for it

use crate::action::Action;
use crate::config::{ComposeConfig, Config};
use crate::error::{ComposeError, Result};
use crate::reporter::Outcome;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// A fully resolved compose invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
}

impl ComposeCommand {
    /// `<program> -f <file> <action args...>`
    pub fn for_action(compose: &ComposeConfig, action: Action) -> Self {
        let mut args = vec!["-f".to_string(), compose.file.to_string_lossy().into_owned()];
        args.extend(action.compose_args().iter().map(|s| s.to_string()));

        Self {
            program: compose.program.clone(),
            args,
            working_directory: compose.working_directory.clone(),
        }
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs a compose command to completion and hands back its exit code.
///
/// `Ok(None)` means the child ended without an exit code (killed by a signal).
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &ComposeCommand) -> Result<Option<i32>>;
}

/// Spawns the real program with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, command: &ComposeCommand) -> Result<Option<i32>> {
        let resolved = which::which(&command.program)
            .map_err(|_| ComposeError::ProgramNotFound(command.program.clone()))?;
        debug!("Resolved {} to {}", command.program, resolved.display());

        let mut cmd = Command::new(resolved);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if let Some(ref wd) = command.working_directory {
            cmd.current_dir(wd);
        }

        let status = cmd
            .status()
            .await
            .map_err(|e| ComposeError::spawn(command.program.clone(), e))?;

        Ok(status.code())
    }
}

/// Validate-dispatch-report driver
pub struct Dispatcher<R = TokioRunner> {
    compose: ComposeConfig,
    dry_run: bool,
    runner: R,
}

impl Dispatcher<TokioRunner> {
    /// Create a dispatcher that runs real processes
    pub fn new(config: &Config) -> Self {
        Self::with_runner(config, TokioRunner)
    }
}

impl<R: ProcessRunner> Dispatcher<R> {
    /// Create a dispatcher around a custom runner
    pub fn with_runner(config: &Config, runner: R) -> Self {
        Self {
            compose: config.compose.clone(),
            dry_run: config.safety.dry_run,
            runner,
        }
    }

    /// The command an action would run
    pub fn command_for(&self, action: Action) -> ComposeCommand {
        ComposeCommand::for_action(&self.compose, action)
    }

    /// Validate a raw token, then dispatch it
    pub async fn dispatch_token(&self, token: &str) -> Result<Outcome> {
        let action = Action::parse(token)?;
        self.dispatch(action).await
    }

    /// Run the single compose command for `action`
    pub async fn dispatch(&self, action: Action) -> Result<Outcome> {
        let command = self.command_for(action);

        if self.dry_run {
            println!("DRY RUN: Would execute: {}", command);
            return Ok(Outcome::dry_run(action));
        }

        info!("Executing: {}", command);
        if action.is_streaming() {
            info!("Press Ctrl+C to stop following logs");
        }

        let exit_code = self.runner.run(&command).await?;
        debug!("{} exited with {:?}", command.program, exit_code);

        Ok(Outcome::new(action, exit_code))
    }
}

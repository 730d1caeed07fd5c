// file: src/action.rs
// version: 1.0.0
// guid: dceeac26-63a2-4dff-9610-60857ee3d7aa

//! The closed set of actions and their fixed compose arguments

use crate::error::{ComposeError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the six operations the tool knows how to run
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Bring services up, detached
    Start,
    /// Bring services down
    Stop,
    /// Restart running services
    Restart,
    /// Follow service logs until interrupted
    Logs,
    /// List service process states
    Status,
    /// Rebuild images without cache
    Build,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Start,
        Action::Stop,
        Action::Restart,
        Action::Logs,
        Action::Status,
        Action::Build,
    ];

    /// Validate a raw token
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            "restart" => Ok(Action::Restart),
            "logs" => Ok(Action::Logs),
            "status" => Ok(Action::Status),
            "build" => Ok(Action::Build),
            other => Err(ComposeError::invalid_action(other)),
        }
    }

    /// The token as typed on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::Logs => "logs",
            Action::Status => "status",
            Action::Build => "build",
        }
    }

    /// Arguments passed to compose after `-f <file>`
    pub fn compose_args(&self) -> &'static [&'static str] {
        match self {
            Action::Start => &["up", "-d"],
            Action::Stop => &["down"],
            Action::Restart => &["restart"],
            Action::Logs => &["logs", "-f"],
            Action::Status => &["ps"],
            Action::Build => &["build", "--no-cache"],
        }
    }

    /// Human-readable label used in outcome messages
    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "Starting services",
            Action::Stop => "Stopping services",
            Action::Restart => "Restarting services",
            Action::Logs => "Following logs",
            Action::Status => "Listing service status",
            Action::Build => "Rebuilding images",
        }
    }

    /// Actions that block until the operator interrupts them
    pub fn is_streaming(&self) -> bool {
        matches!(self, Action::Logs)
    }
}

impl FromStr for Action {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self> {
        Action::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

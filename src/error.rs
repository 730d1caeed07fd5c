// file: src/error.rs
// version: 1.0.0
// guid: d713689c-8a66-4b06-bbb1-f02809e6ad4b

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Error types for compose-ctl
///
/// A compose command that runs and exits non-zero is not an error; it is
/// reported through [`crate::reporter::Outcome`]. These variants cover
/// everything that stops us from getting that far.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Invalid action '{0}': expected one of start, stop, restart, logs, status, build")]
    InvalidAction(String),

    #[error("Command not found: {0}")]
    ProgramNotFound(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ComposeError {
    /// Create a new invalid action error
    pub fn invalid_action(token: impl Into<String>) -> Self {
        Self::InvalidAction(token.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// True when the error was raised before any process was started
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAction(_))
    }
}

// file: src/lib.rs
// version: 1.0.0
// guid: 85a012e0-fdc8-4824-bc59-b5ccce291baa

//! # compose-ctl
//!
//! Runs one of six fixed `docker-compose` commands against the LiteLLM
//! debug stack's compose file and reports whether it succeeded.
//!
//! The flow is always the same: validate an [`Action`], build the
//! [`dispatcher::ComposeCommand`] for it, run it to completion, and turn the
//! child's exit status into a [`reporter::Outcome`].

pub mod action;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod reporter;

pub use action::Action;
pub use dispatcher::{ComposeCommand, Dispatcher, ProcessRunner, TokioRunner};
pub use error::{ComposeError, Result};
pub use reporter::Outcome;

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

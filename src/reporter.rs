// file: src/reporter.rs
// version: 1.0.0
// guid: 23cb22b9-4895-4576-8a67-cb0a0cafa6aa

//! Outcome of a single dispatch and how it is shown to the operator

use crate::action::Action;
use colored::Colorize;
use tracing::{error, info};

/// Result of running one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    /// Exit code of the child; `None` if it was terminated by a signal
    pub exit_code: Option<i32>,
    pub dry_run: bool,
}

impl Outcome {
    pub fn new(action: Action, exit_code: Option<i32>) -> Self {
        Self {
            action,
            exit_code,
            dry_run: false,
        }
    }

    pub fn dry_run(action: Action) -> Self {
        Self {
            action,
            exit_code: None,
            dry_run: true,
        }
    }

    /// Zero exit status, and nothing else, counts as success
    pub fn success(&self) -> bool {
        self.dry_run || self.exit_code == Some(0)
    }

    /// Process exit code the tool should finish with
    pub fn process_exit_code(&self) -> i32 {
        if self.success() {
            return 0;
        }
        match self.exit_code {
            Some(code) if code != 0 => code,
            _ => 1,
        }
    }

    pub fn message(&self) -> String {
        let label = self.action.label();
        if self.dry_run {
            return format!("{} (dry run)", label);
        }
        match self.exit_code {
            Some(0) => format!("{} succeeded", label),
            Some(code) => format!("{} failed (exit code {})", label, code),
            None => format!("{} failed (terminated by signal)", label),
        }
    }
}

/// Print the outcome: successes to stdout, failures to stderr
pub fn report(outcome: &Outcome) {
    let message = outcome.message();
    if outcome.success() {
        info!(action = %outcome.action, "{}", message);
        println!("{} {}", "✔".green().bold(), message);
    } else {
        error!(action = %outcome.action, exit_code = ?outcome.exit_code, "{}", message);
        eprintln!("{} {}", "✘".red().bold(), message);
    }
}

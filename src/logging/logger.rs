// file: src/logging/logger.rs
// version: 1.1.0
// guid: 645fb9e9-e30f-46c4-9330-44f96a40fdfc

//! Logger initialization and configuration

use crate::config::LoggingConfig;
use crate::error::{ComposeError, Result};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Pick the filter directive: flags first, then `RUST_LOG`, then the config
pub fn filter_directive(verbose: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        env
    } else {
        configured.to_string()
    }
}

/// Path of the log file for a run started now
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let now = chrono::Local::now();
    config
        .log_directory
        .join(format!("compose-ctl-{}.log", now.format("%Y%m%d_%H%M%S")))
}

/// Create the log directory and open this run's log file for appending
pub fn open_log_file(config: &LoggingConfig) -> Result<(fs::File, PathBuf)> {
    fs::create_dir_all(&config.log_directory)?;
    let path = log_file_path(config);
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize the logging system.
///
/// Console output goes to stderr so it never mixes with compose output on
/// stdout. Returns the log file path when file logging is enabled.
pub fn init_logger(verbose: bool, quiet: bool, config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let directive = filter_directive(verbose, quiet, &config.level);
    let make_filter = || {
        EnvFilter::try_new(&directive)
            .map_err(|e| ComposeError::config(format!("Invalid log level '{}': {}", directive, e)))
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(make_filter()?);

    let (file_layer, log_path) = if config.log_to_file {
        let (file, path) = open_log_file(config)?;
        let layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .with_filter(make_filter()?);
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ComposeError::config(format!("Failed to initialize logger: {}", e)))?;

    if let Some(ref path) = log_path {
        tracing::debug!("Logging to {}", path.display());
    }

    Ok(log_path)
}

// file: src/config.rs
// version: 1.1.0
// guid: fbcbf2c7-db81-4d33-b34b-8002ee072bf1

use crate::error::{ComposeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Project-local settings file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".compose-ctl.toml";

/// Compose file every invocation is pointed at
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.dev.yml";

/// Orchestration program
pub const DEFAULT_PROGRAM: &str = "docker-compose";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compose: ComposeConfig,
    pub logging: LoggingConfig,
    pub safety: SafetyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub program: String,
    pub file: PathBuf,
    pub working_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_to_file: bool,
    pub log_directory: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    pub dry_run: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            working_directory: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_directory: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Load configuration from the user and project files, then the environment.
    ///
    /// The project file is merged over the user file key by key. An explicit
    /// path replaces both file lookups and must exist.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            info!("Loading configuration from: {}", path.display());
            Self::load_from_file(path).await?
        } else {
            let mut layers = Vec::new();

            if let Some(user_config) = Self::user_config_path() {
                if user_config.exists() {
                    info!("Loading user configuration from: {}", user_config.display());
                    layers.push(Self::read_table(&user_config).await?);
                }
            }

            let project_config = Path::new(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                info!(
                    "Loading project configuration from: {}",
                    project_config.display()
                );
                layers.push(Self::read_table(project_config).await?);
            }

            Self::from_layers(layers)?
        };

        config = config.apply_env_overrides(|key| std::env::var(key).ok())?;

        debug!("Final configuration: {:#?}", config);
        Ok(config)
    }

    /// Get the user configuration file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("compose-ctl").join("config.toml"))
    }

    /// Load configuration from a single TOML file
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let table = Self::read_table(path).await?;
        Self::from_layers([table]).map_err(|e| {
            ComposeError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Read a TOML file as a raw table, without applying defaults
    async fn read_table(path: &Path) -> Result<toml::Table> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ComposeError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        content.parse::<toml::Table>().map_err(|e| {
            ComposeError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Merge tables in order, later keys winning, then fill in defaults
    pub fn from_layers<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = toml::Table>,
    {
        let mut merged = toml::Table::new();
        for layer in layers {
            merge_tables(&mut merged, layer);
        }

        let config: Self = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `COMPOSE_CTL_*` overrides using the given lookup
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup("COMPOSE_CTL_PROGRAM") {
            self.compose.program = program;
        }

        if let Some(file) = lookup("COMPOSE_CTL_FILE") {
            self.compose.file = PathBuf::from(file);
        }

        if let Some(dry_run) = lookup("COMPOSE_CTL_DRY_RUN") {
            self.safety.dry_run = parse_bool(&dry_run).ok_or_else(|| {
                ComposeError::config(format!("COMPOSE_CTL_DRY_RUN is not a boolean: {}", dry_run))
            })?;
        }

        if let Some(level) = lookup("COMPOSE_CTL_LOG_LEVEL") {
            self.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject settings that can never produce a runnable command
    pub fn validate(&self) -> Result<()> {
        if self.compose.program.trim().is_empty() {
            return Err(ComposeError::config("compose.program must not be empty"));
        }
        if self.compose.file.as_os_str().is_empty() {
            return Err(ComposeError::config("compose.file must not be empty"));
        }
        Ok(())
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(nested) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, nested);
                continue;
            }
            base.insert(key, toml::Value::Table(nested));
        } else {
            base.insert(key, value);
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

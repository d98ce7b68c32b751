//! # CLI Configuration
//!
//! Where the connection descriptor and logging settings come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --database-url sqlite://travel.db                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     WAYFARER_DATABASE_URL=sqlite://travel.db                           │
//! │     WAYFARER_MAX_CONNECTIONS=5                                         │
//! │     WAYFARER_CONNECT_TIMEOUT_SECS=30                                   │
//! │     WAYFARER_LOG_FORMAT=json                                           │
//! │                                                                         │
//! │  3. TOML Config File (--config path)                                   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [database]
//! url = "sqlite://travel.db"
//! max_connections = 5
//! connect_timeout_secs = 30
//! read_only = true
//!
//! [logging]
//! format = "json"  # pretty | json
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use wayfarer_db::DbConfig;

// =============================================================================
// Log Format
// =============================================================================

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,

    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("WAYFARER_LOG_FORMAT".to_string())),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Store connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// The CLI only reads, so it opens the store read-only unless told otherwise.
    #[serde(default = "default_true")]
    pub read_only: bool,
}

fn default_database_url() -> String {
    "sqlite://wayfarer.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout(),
            read_only: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub format: LogFormat,
}

// =============================================================================
// Wayfarer Config
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WayfarerConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl WayfarerConfig {
    /// Loads defaults, then the optional TOML file, then the process environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(file, |key| std::env::var(key).ok())
    }

    /// Same as [`WayfarerConfig::load`] with an injectable environment.
    pub fn load_with(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                Self::from_toml(&contents)?
            }
            None => WayfarerConfig::default(),
        };

        config.apply_env(env)?;
        Ok(config)
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(url) = env("WAYFARER_DATABASE_URL") {
            debug!("Database URL taken from environment");
            self.database.url = url;
        }

        if let Some(value) = env("WAYFARER_MAX_CONNECTIONS") {
            self.database.max_connections = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WAYFARER_MAX_CONNECTIONS".to_string()))?;
        }

        if let Some(value) = env("WAYFARER_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs = value.parse().map_err(|_| {
                ConfigError::InvalidValue("WAYFARER_CONNECT_TIMEOUT_SECS".to_string())
            })?;
        }

        if let Some(value) = env("WAYFARER_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }

        Ok(())
    }

    /// Builds the pool configuration for wayfarer-db.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database.url.clone())
            .max_connections(self.database.max_connections)
            .connect_timeout(Duration::from_secs(self.database.connect_timeout_secs))
            .read_only(self.database.read_only)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid config file: {0}")]
    Parse(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

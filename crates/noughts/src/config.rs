//! File-based configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Difficulty, Mark, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings loaded from `noughts.toml`.
///
/// ```toml
/// human_mark = "second"
/// difficulty = "search"
/// seed = 42
/// log_filter = "noughts=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Side, difficulty and seed for new sessions.
    #[serde(flatten)]
    session: SessionConfig,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            human = %config.session.human_mark(),
            difficulty = %config.session.difficulty(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Session settings with command-line values taking precedence.
    pub fn session_with_overrides(
        &self,
        human_mark: Option<Mark>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> SessionConfig {
        let config = SessionConfig::new(
            human_mark.unwrap_or(*self.session.human_mark()),
            difficulty.unwrap_or(*self.session.difficulty()),
        );
        match seed.or(*self.session.seed()) {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

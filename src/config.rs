//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Player-facing settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Let the computer open every new game.
    #[serde(default)]
    ai_first: bool,

    /// Tracing filter directive (e.g. "debug"). `RUST_LOG` wins if set.
    #[serde(default)]
    log_filter: Option<String>,

    /// Where `play` mode writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_minimax.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_first: false,
            log_filter: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ai_first = config.ai_first, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir`
    /// if it exists, else the defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be read or parsed is an error. So is
    /// a default file that exists but does not parse.
    #[instrument(skip(dir))]
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides `ai_first` (from a command-line flag).
    pub fn with_ai_first(mut self, ai_first: bool) -> Self {
        self.ai_first = ai_first;
        self
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

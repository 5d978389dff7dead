//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use imposter_core::{DEFAULT_SUGGESTIONS, Dice, WordSuggestions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a game table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Words offered by the suggest key.
    #[serde(default = "default_word_suggestions")]
    word_suggestions: Vec<String>,

    /// Fixed seed for repeatable games; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Log destination.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_word_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|w| w.to_string()).collect()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("imposter_word.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_suggestions: default_word_suggestions(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            suggestions = config.word_suggestions.len(),
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, seed: Option<u64>, log_file: Option<PathBuf>) -> Self {
        if let Some(seed) = seed {
            debug!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        if let Some(log_file) = log_file {
            debug!(log_file = %log_file.display(), "Overriding log file");
            self.log_file = log_file;
        }
        self
    }

    /// Builds the suggestion list.
    pub fn suggestions(&self) -> WordSuggestions {
        WordSuggestions::new(&self.word_suggestions)
    }

    /// Builds the dice, seeded if configured.
    pub fn dice(&self) -> Dice {
        match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::from_os_rng(),
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

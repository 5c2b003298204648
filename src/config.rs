//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::{Difficulty, Player};
use tracing::{debug, info, instrument};

/// Config file read when no `--config` path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Settings for a game session.
///
/// ```toml
/// difficulty = "hard"
/// human_mark = "X"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Strategy for the computer's moves.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the human plays. X always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Seed for the random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Player {
    Player::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_mark: default_human_mark(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(difficulty: Difficulty, human_mark: Player, seed: Option<u64>) -> Self {
        Self {
            difficulty,
            human_mark,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] when it exists,
    /// otherwise defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces fields with command-line values where given.
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        human_mark: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(human_mark) = human_mark {
            self.human_mark = human_mark;
        }
        if seed.is_some() {
            self.seed = seed;
        }
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

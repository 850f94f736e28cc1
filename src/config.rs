//! Runtime configuration loaded from `config.yaml`

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_size: usize,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub engine: EngineConfig,
    pub self_play: SelfPlayConfig,
}

/// Move-selection options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score candidate cells on the rayon thread pool
    pub parallel: bool,
}

/// Options for the AI-vs-AI demo game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Stop after this many moves; `None` plays until win or draw
    pub max_moves: Option<usize>,
    pub seed: u64,
    /// Place Black's first stone on a random empty cell
    pub random_opening: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
            self_play: SelfPlayConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_moves: None,
            seed: 42,
            random_opening: false,
        }
    }
}

impl Config {
    /// Read and validate a YAML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "board_size {} outside {}..={}",
                    self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
                ),
            });
        }
        if self.self_play.max_moves == Some(0) {
            return Err(ConfigError::Invalid {
                message: "self_play.max_moves must be positive".to_string(),
            });
        }
        Ok(())
    }
}

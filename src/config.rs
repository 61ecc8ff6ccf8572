use std::path::Path;

use log::warn;

use crate::countdown::DEFAULT_LIMIT_TICKS;
use crate::error::{ConfigError, GameError};
use crate::game::spawner::HIGH_SPAWN;
use crate::game::{DEFAULT_SIZE, DEFAULT_WIN_EXPONENT, MIN_SIZE};
use crate::history::ScoreHistoryConfig;

/// Board and rule settings
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub win_exponent: u8,
    /// Fixed spawn seed; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: DEFAULT_SIZE,
            win_exponent: DEFAULT_WIN_EXPONENT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub limit_secs: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        CountdownConfig {
            limit_secs: DEFAULT_LIMIT_TICKS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub countdown: CountdownConfig,
    pub history: ScoreHistoryConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.size < MIN_SIZE {
            return Err(GameError::BoardTooSmall {
                size: self.game.size,
                min: MIN_SIZE,
            }
            .into());
        }
        if self.game.win_exponent <= HIGH_SPAWN {
            return Err(GameError::WinExponentTooLow {
                win_exponent: self.game.win_exponent,
                max_spawn: HIGH_SPAWN,
            }
            .into());
        }
        if self.countdown.limit_secs == 0 {
            return Err(ConfigError::Validation(
                "countdown.limit_secs must be > 0".into(),
            ));
        }
        if self.history.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "history.path must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

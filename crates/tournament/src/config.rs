//! Application configuration, read from a TOML file.

use std::path::{Path, PathBuf};

use checkers_core::{Color, Difficulty, RuleOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings shared by the front ends. Every field is optional in the file.
///
/// ```toml
/// player_color = "black"
/// difficulty = "hard"
/// seed = 42
/// username = "alice"
/// stats_path = "stats.json"
/// blocked_side_loses = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Color of the local (human) player
    pub player_color: Color,
    /// Engine strength for the opposing side
    pub difficulty: Difficulty,
    /// Seed for the engine's random source (None = OS entropy)
    pub seed: Option<u64>,
    /// Name under which results are recorded
    pub username: String,
    /// JSON file holding player statistics
    pub stats_path: PathBuf,
    /// Count a side with pieces but no legal move as lost
    pub blocked_side_loses: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_color: Color::White,
            difficulty: Difficulty::Medium,
            seed: None,
            username: "player".to_string(),
            stats_path: PathBuf::from("checkers_stats.json"),
            blocked_side_loses: false,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn rules(&self) -> RuleOptions {
        RuleOptions {
            blocked_side_loses: self.blocked_side_loses,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

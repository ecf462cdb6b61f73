//! Game configuration, loadable from JSON

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::error::HexError;

/// Default board side
pub const DEFAULT_SIZE: usize = 8;

/// Settings for a game session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length (3 to 1024)
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl GameConfig {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Check settings before building a game
    pub fn validate(&self) -> Result<(), HexError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(HexError::InvalidSize { size: self.size });
        }
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

//! Board settings shared by every command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexy_core::GameConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// Board side length (overrides --config)
    #[arg(long)]
    pub size: Option<usize>,

    /// Game configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl BoardArgs {
    /// Resolve the effective configuration: file, then flag overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardArgs::default().resolve().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_size_override() {
        let args = BoardArgs {
            size: Some(5),
            config: None,
        };
        assert_eq!(args.resolve().unwrap().size, 5);
    }

    #[test]
    fn test_rejects_small_size() {
        let args = BoardArgs {
            size: Some(2),
            config: None,
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let args = BoardArgs {
            size: Some(4_000_000_000),
            config: None,
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("invalid board size"));
    }

    #[test]
    fn test_missing_file() {
        let args = BoardArgs {
            size: None,
            config: Some(PathBuf::from("/nonexistent/hexy.json")),
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}

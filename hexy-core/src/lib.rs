//! Hexy Core - Hex game engine
//!
//! This crate provides the core game logic for Hexy:
//! - Board model (rhombic hex grid on skewed square coordinates)
//! - Connection search for victory, with universal corners
//! - Turn and game-over state machine with session scores
//! - Configuration and a seeded random player

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod victory;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, EdgeKind, DIRECTIONS, MAX_SIZE, MIN_SIZE};
pub use config::{GameConfig, DEFAULT_SIZE};
pub use error::{HexError, Result};
pub use game::{ClickOutcome, Game, GameStatus, MoveResult, Placement, Player, Rejection, Scores, Snapshot};
pub use player::RandomPlayer;
pub use victory::has_won;

//! Error types for board construction and mutation

/// Errors raised by the board and game engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// Board side outside the supported range
    #[error("invalid board size {size}: must be between 3 and 1024")]
    InvalidSize { size: usize },

    /// Coordinate outside `[0, size)` on either axis
    #[error("cell ({i}, {j}) is outside a {size}x{size} board")]
    OutOfBounds { i: usize, j: usize, size: usize },

    /// Cell already claimed by a player
    #[error("cell ({i}, {j}) is already occupied")]
    CellOccupied { i: usize, j: usize },

    /// Placement attempted after the game ended
    #[error("game is over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, HexError>;

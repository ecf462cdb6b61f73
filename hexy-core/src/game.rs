//! Game aggregate: board, turn order, victory and session scores

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Coord};
use crate::config::GameConfig;
use crate::error::{HexError, Result};
use crate::victory::has_won;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color. A always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A = 0,
    B = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => f.write_str("A"),
            Player::B => f.write_str("B"),
        }
    }
}

/// Where the turn state machine currently sits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    AwaitingMove(Player),
    GameOver(Player),
}

/// Why a move was refused. The game is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Cell already claimed
    Occupied,
    /// Input did not resolve to a cell on the board
    OffBoard,
    /// Game finished; reset before moving
    GameOver,
}

/// Outcome of a move attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Applied { next_turn: Player },
    Rejected(Rejection),
    GameWon { winner: Player },
}

/// Outcome of a pointer click
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Move(MoveResult),
    /// Click on a finished game started a new one
    Reset,
}

/// Win counters for the session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub a: u32,
    pub b: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::A => self.a += 1,
            Player::B => self.b += 1,
        }
    }
}

/// An applied placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: Player,
    pub coord: Coord,
}

/// Serializable view of a game
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub size: usize,
    /// Rows of cells, `cells[j][i]`
    pub cells: Vec<Vec<Cell>>,
    /// Player to move, or the winner once the game is over
    pub turn: Player,
    pub status: GameStatus,
    pub scores: Scores,
    pub history: Vec<Placement>,
}

// ============================================================================
// GAME
// ============================================================================

/// A session of Hex games on one board size
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    scores: Scores,
    history: Vec<Placement>,
}

impl Game {
    /// Start a session with an empty board
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            status: GameStatus::AwaitingMove(Player::A),
            scores: Scores::default(),
            history: Vec::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.size)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cell_state(&self, c: Coord) -> Result<Cell> {
        self.board.get(c)
    }

    /// Player to move, or the winner once the game is over
    pub fn current_turn(&self) -> Player {
        match self.status {
            GameStatus::AwaitingMove(player) | GameStatus::GameOver(player) => player,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::GameOver(player) => Some(player),
            GameStatus::AwaitingMove(_) => None,
        }
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Placements of the current game, oldest first
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    pub fn snapshot(&self) -> Snapshot {
        let size = self.size();
        let cells: Vec<Cell> = self.board.cells().map(|(_, cell)| cell).collect();
        Snapshot {
            size,
            cells: cells.chunks(size).map(<[Cell]>::to_vec).collect(),
            turn: self.current_turn(),
            status: self.status,
            scores: self.scores,
            history: self.history.clone(),
        }
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Place a stone for the player to move and advance the turn
    pub fn attempt_move(&mut self, c: Coord) -> MoveResult {
        match self.play(c) {
            Ok(result) => result,
            Err(HexError::CellOccupied { .. }) => MoveResult::Rejected(Rejection::Occupied),
            Err(HexError::GameOver) => MoveResult::Rejected(Rejection::GameOver),
            Err(HexError::OutOfBounds { .. }) => MoveResult::Rejected(Rejection::OffBoard),
            // Only raised by construction; a placement never produces it
            Err(e @ HexError::InvalidSize { .. }) => {
                tracing::error!("Unexpected error placing at {}: {}", c, e);
                MoveResult::Rejected(Rejection::OffBoard)
            }
        }
    }

    /// Like `attempt_move`, but reports refusals as errors
    pub fn play(&mut self, c: Coord) -> Result<MoveResult> {
        let player = match self.status {
            GameStatus::AwaitingMove(player) => player,
            GameStatus::GameOver(_) => return Err(HexError::GameOver),
        };

        self.board.place(c, player)?;
        self.history.push(Placement { player, coord: c });
        tracing::debug!("{} placed at {}", player, c);

        if has_won(&self.board, player) {
            self.scores.record_win(player);
            self.status = GameStatus::GameOver(player);
            tracing::info!(
                "Player {} wins after {} moves (score A={} B={})",
                player,
                self.history.len(),
                self.scores.a,
                self.scores.b
            );
            return Ok(MoveResult::GameWon { winner: player });
        }

        let next_turn = player.opponent();
        self.status = GameStatus::AwaitingMove(next_turn);
        Ok(MoveResult::Applied { next_turn })
    }

    /// Clear the board for a new game. Scores are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::AwaitingMove(Player::A);
        self.history.clear();
        tracing::info!("Board reset (score A={} B={})", self.scores.a, self.scores.b);
    }

    /// Move the hover highlight. `None` clears it. Ignored once the game is over.
    pub fn hover(&mut self, target: Option<Coord>) {
        if self.is_game_over() {
            return;
        }
        self.board.clear_highlights();
        // Off-board targets just clear
        if let Some(c) = target.filter(|&c| self.board.contains(c)) {
            if let Err(e) = self.board.highlight(c) {
                tracing::warn!("Highlight at {} failed: {}", c, e);
            }
        }
    }

    /// Handle a click: resets a finished game, otherwise attempts a move
    pub fn click(&mut self, target: Option<Coord>) -> ClickOutcome {
        if self.is_game_over() {
            self.reset();
            return ClickOutcome::Reset;
        }
        let result = match target {
            Some(c) => self.attempt_move(c),
            None => MoveResult::Rejected(Rejection::OffBoard),
        };
        ClickOutcome::Move(result)
    }
}

//! Seeded random player for automated games

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::Coord;
use crate::game::{Game, MoveResult, Player};

/// Picks uniformly among the open cells
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a cell for the player to move, `None` once the game is over
    pub fn choose(&mut self, game: &Game) -> Option<Coord> {
        if game.is_game_over() {
            return None;
        }
        let open: Vec<Coord> = game.board().empty_cells().collect();
        open.choose(&mut self.rng).copied()
    }

    /// Play both sides until someone wins. Returns the winner.
    pub fn play_game(&mut self, game: &mut Game) -> Option<Player> {
        while let Some(c) = self.choose(game) {
            if let MoveResult::GameWon { winner } = game.attempt_move(c) {
                return Some(winner);
            }
        }
        game.winner()
    }
}

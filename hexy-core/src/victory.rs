//! Connection search deciding whether a player has won
//!
//! Depth-first reachability from the player's near edge to the far edge
//! along the player's own stones. Uses an explicit stack, so recursion
//! depth never grows with the board.

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord};
use crate::game::Player;

/// Whether `player` has an unbroken chain joining their two edges.
///
/// Total over every board: never fails, keeps no state between calls.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mut visited = FxHashSet::default();

    board
        .near_edge(player)
        .filter(|&start| board.owner(start) == Some(player))
        .any(|start| reaches_far_edge(board, player, start, &mut visited))
}

/// Search from one start cell, sharing `visited` with earlier starts.
///
/// A far-edge cell ends the search before it is marked, so it stays
/// reachable from every direction.
fn reaches_far_edge(
    board: &Board,
    player: Player,
    start: Coord,
    visited: &mut FxHashSet<Coord>,
) -> bool {
    let mut stack = vec![start];

    while let Some(c) = stack.pop() {
        if visited.contains(&c) || board.owner(c) != Some(player) {
            continue;
        }
        if board.is_on_far_edge(c, player) {
            return true;
        }
        visited.insert(c);

        // Reverse push so neighbors pop in DIRECTIONS order
        let mark = stack.len();
        stack.extend(board.neighbors(c));
        stack[mark..].reverse();
    }

    false
}

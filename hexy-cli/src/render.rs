//! Text rendering of the rhombic board
//!
//! Row `j` is shifted right by `j` columns so each cell sits between its
//! two neighbors in the rows above and below. Edge markers come from
//! `Board::edge_kind`: `A` for player A's goal rows, `B` for player B's
//! goal columns, `*` for the corners both players share.

use std::fmt::Write;

use hexy_core::{Board, Cell, Coord, EdgeKind, Game, GameStatus, Player};

fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Highlighted => '+',
        Cell::Owned(Player::A) => 'A',
        Cell::Owned(Player::B) => 'B',
    }
}

fn edge_marker(kind: EdgeKind) -> char {
    match kind {
        EdgeKind::GoalA => 'A',
        EdgeKind::GoalB => 'B',
        EdgeKind::Corner => '*',
        EdgeKind::Interior => ' ',
    }
}

/// Render the board alone
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    // Column header, aligned with row 0
    out.push_str("     ");
    for i in 0..size {
        let _ = write!(out, "{:<2}", i % 10);
    }
    out.push('\n');
    goal_row(&mut out, board, 0, 0);

    let last = size - 1;
    for j in 0..size {
        let left = edge_marker(board.edge_kind(Coord::new(0, j)));
        let right = edge_marker(board.edge_kind(Coord::new(last, j)));
        let _ = write!(out, "{:>2} {}{} ", j, " ".repeat(j), left);
        for i in 0..size {
            let cell = board.get(Coord::new(i, j)).unwrap_or_default();
            out.push(cell_glyph(cell));
            out.push(' ');
        }
        out.push(right);
        out.push('\n');
    }

    goal_row(&mut out, board, last, size);
    out
}

/// Markers for the edge of row `j`, shifted right by `shift`
fn goal_row(out: &mut String, board: &Board, j: usize, shift: usize) {
    let markers: Vec<String> = (0..board.size())
        .map(|i| edge_marker(board.edge_kind(Coord::new(i, j))).to_string())
        .collect();
    let _ = writeln!(out, "     {}{}", " ".repeat(shift), markers.join(" "));
}

/// Render the board with turn and score lines
pub fn render_game(game: &Game) -> String {
    let mut out = render_board(game.board());
    let scores = game.scores();
    let status = match game.status() {
        GameStatus::AwaitingMove(player) => format!("Player {} to move", player),
        GameStatus::GameOver(player) => {
            format!("Player {} wins! Enter anything to start a new game", player)
        }
    };
    let _ = writeln!(out, "{}    [A {} - {} B]", status, scores.a, scores.b);
    out
}

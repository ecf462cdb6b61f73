//! Rhombic hex board stored as a skewed square grid
//!
//! Column `i` and row `j` are two of the three axial hex directions, so
//! each cell touches six others. Player A joins row `0` to row `size - 1`,
//! player B joins column `0` to column `size - 1`. The four corners lie on
//! one edge of each player and therefore count for both.

use serde::{Deserialize, Serialize};

use crate::error::{HexError, Result};
use crate::game::Player;

/// Smallest playable board side
pub const MIN_SIZE: usize = 3;

/// Largest supported board side
pub const MAX_SIZE: usize = 1024;

/// Neighbor offsets `(di, dj)` over the skewed axes, in search order
pub const DIRECTIONS: [(isize, isize); 6] = [
    (0, -1),  // row above
    (1, -1),  // row above, next column
    (-1, 0),  // previous column
    (-1, 1),  // row below, previous column
    (1, 0),   // next column
    (0, 1),   // row below
];

/// Grid coordinate: column `i`, row `j`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub i: usize,
    pub j: usize,
}

impl Coord {
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Step by an offset, `None` if it leaves the non-negative quadrant
    fn offset(self, di: isize, dj: isize) -> Option<Coord> {
        Some(Coord::new(
            self.i.checked_add_signed(di)?,
            self.j.checked_add_signed(dj)?,
        ))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// State of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Empty cell under the pointer; behaves exactly like `Empty` in play
    Highlighted,
    Owned(Player),
}

impl Cell {
    /// Whether a stone may be placed here
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Empty | Cell::Highlighted)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Owned(player) => Some(player),
            Cell::Empty | Cell::Highlighted => None,
        }
    }
}

/// Goal-edge classification of a cell, for renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Interior,
    /// Row `0` or `size - 1`
    GoalA,
    /// Column `0` or `size - 1`
    GoalB,
    /// Shared by both players
    Corner,
}

/// Square grid of cells, row-major (`index = j * size + i`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create an empty `size x size` board
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(HexError::InvalidSize { size });
        }
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size * size)
            .map_err(|_| HexError::InvalidSize { size })?;
        cells.resize(size * size, Cell::Empty);
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // ========================================================================
    // INDEXING
    // ========================================================================

    pub fn contains(&self, c: Coord) -> bool {
        c.i < self.size && c.j < self.size
    }

    /// Flat tile index of a coordinate
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.j * self.size + c.i)
    }

    /// Coordinate of a flat tile index
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        (index < self.cells.len()).then(|| Coord::new(index % self.size, index / self.size))
    }

    fn checked_index(&self, c: Coord) -> Result<usize> {
        self.index_of(c).ok_or(HexError::OutOfBounds {
            i: c.i,
            j: c.j,
            size: self.size,
        })
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get(&self, c: Coord) -> Result<Cell> {
        Ok(self.cells[self.checked_index(c)?])
    }

    /// Owner of an in-bounds cell, `None` for vacant or off-board cells
    pub fn owner(&self, c: Coord) -> Option<Player> {
        self.index_of(c).and_then(|idx| self.cells[idx].owner())
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coord::new(idx % size, idx / size), cell))
    }

    /// Cells a stone may still be placed on
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_vacant())
            .map(|(c, _)| c)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_vacant())
    }

    /// In-bounds hex neighbors, in `DIRECTIONS` order
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> {
        let size = self.size;
        DIRECTIONS
            .iter()
            .filter_map(move |&(di, dj)| c.offset(di, dj))
            .filter(move |n| n.i < size && n.j < size)
    }

    // ========================================================================
    // EDGES
    // ========================================================================

    /// On the edge the player starts a connection from
    pub fn is_on_near_edge(&self, c: Coord, player: Player) -> bool {
        match player {
            Player::A => c.j == 0,
            Player::B => c.i == 0,
        }
    }

    /// On the edge the player must reach
    pub fn is_on_far_edge(&self, c: Coord, player: Player) -> bool {
        let last = self.size - 1;
        match player {
            Player::A => c.j == last,
            Player::B => c.i == last,
        }
    }

    pub fn is_corner(&self, c: Coord) -> bool {
        let last = self.size - 1;
        (c.i == 0 || c.i == last) && (c.j == 0 || c.j == last)
    }

    /// Every cell of the player's near edge, corners included
    pub fn near_edge(&self, player: Player) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).map(move |k| match player {
            Player::A => Coord::new(k, 0),
            Player::B => Coord::new(0, k),
        })
    }

    pub fn edge_kind(&self, c: Coord) -> EdgeKind {
        let last = self.size - 1;
        if self.is_corner(c) {
            EdgeKind::Corner
        } else if c.j == 0 || c.j == last {
            EdgeKind::GoalA
        } else if c.i == 0 || c.i == last {
            EdgeKind::GoalB
        } else {
            EdgeKind::Interior
        }
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Claim a vacant cell. Fails without side effects if occupied.
    pub fn place(&mut self, c: Coord, player: Player) -> Result<()> {
        let idx = self.checked_index(c)?;
        if !self.cells[idx].is_vacant() {
            return Err(HexError::CellOccupied { i: c.i, j: c.j });
        }
        self.cells[idx] = Cell::Owned(player);
        Ok(())
    }

    /// Mark an empty cell as hovered. Returns whether it changed.
    pub fn highlight(&mut self, c: Coord) -> Result<bool> {
        let idx = self.checked_index(c)?;
        if self.cells[idx] == Cell::Empty {
            self.cells[idx] = Cell::Highlighted;
            return Ok(true);
        }
        Ok(false)
    }

    /// Return every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn clear_highlights(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Highlighted {
                *cell = Cell::Empty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.cells().count(), 25);
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(Board::new(2), Err(HexError::InvalidSize { size: 2 }));
        assert_eq!(Board::new(0), Err(HexError::InvalidSize { size: 0 }));
        assert!(Board::new(3).is_ok());
    }

    #[test]
    fn test_oversized_board_is_an_error() {
        assert!(Board::new(MAX_SIZE).is_ok());
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(HexError::InvalidSize { size: MAX_SIZE + 1 })
        );
        assert_eq!(
            Board::new(4_000_000_000),
            Err(HexError::InvalidSize { size: 4_000_000_000 })
        );
        assert_eq!(
            Board::new(usize::MAX),
            Err(HexError::InvalidSize { size: usize::MAX })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.get(Coord::new(3, 0)),
            Err(HexError::OutOfBounds { i: 3, j: 0, size: 3 })
        );
        assert!(board.get(Coord::new(0, 7)).is_err());
        assert_eq!(board.owner(Coord::new(9, 9)), None);
    }

    #[test]
    fn test_place_once() {
        let mut board = Board::new(4).unwrap();
        let c = Coord::new(1, 2);
        board.place(c, Player::A).unwrap();
        assert_eq!(board.get(c), Ok(Cell::Owned(Player::A)));

        let before = board.clone();
        assert_eq!(
            board.place(c, Player::B),
            Err(HexError::CellOccupied { i: 1, j: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_highlight() {
        let mut board = Board::new(4).unwrap();
        let c = Coord::new(2, 2);
        assert_eq!(board.highlight(c), Ok(true));
        assert_eq!(board.get(c), Ok(Cell::Highlighted));
        board.place(c, Player::B).unwrap();
        assert_eq!(board.get(c), Ok(Cell::Owned(Player::B)));
        // Owned cells cannot be highlighted
        assert_eq!(board.highlight(c), Ok(false));
    }

    #[test]
    fn test_clear_highlights() {
        let mut board = Board::new(3).unwrap();
        board.highlight(Coord::new(0, 0)).unwrap();
        board.highlight(Coord::new(2, 1)).unwrap();
        board.clear_highlights();
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_neighbors_interior() {
        let board = Board::new(5).unwrap();
        let ns: Vec<_> = board.neighbors(Coord::new(2, 2)).collect();
        assert_eq!(
            ns,
            vec![
                Coord::new(2, 1),
                Coord::new(3, 1),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(3, 2),
                Coord::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_neighbors_corners() {
        let board = Board::new(4).unwrap();
        // Acute corners touch two cells, obtuse corners three
        assert_eq!(board.neighbors(Coord::new(0, 0)).count(), 2);
        assert_eq!(board.neighbors(Coord::new(3, 3)).count(), 2);
        assert_eq!(board.neighbors(Coord::new(3, 0)).count(), 3);
        assert_eq!(board.neighbors(Coord::new(0, 3)).count(), 3);
    }

    #[test]
    fn test_neighbors_symmetric() {
        let board = Board::new(6).unwrap();
        for (c, _) in board.cells() {
            for n in board.neighbors(c) {
                assert!(board.neighbors(n).any(|back| back == c), "{c} -> {n}");
            }
        }
    }

    #[test]
    fn test_edges() {
        let board = Board::new(4).unwrap();
        assert!(board.is_on_near_edge(Coord::new(2, 0), Player::A));
        assert!(board.is_on_far_edge(Coord::new(2, 3), Player::A));
        assert!(board.is_on_near_edge(Coord::new(0, 2), Player::B));
        assert!(board.is_on_far_edge(Coord::new(3, 2), Player::B));
        assert!(!board.is_on_near_edge(Coord::new(1, 1), Player::A));
        assert!(!board.is_on_far_edge(Coord::new(1, 1), Player::B));
    }

    #[test]
    fn test_corners_belong_to_both_players() {
        let board = Board::new(4).unwrap();
        for c in [Coord::new(0, 0), Coord::new(3, 0), Coord::new(0, 3), Coord::new(3, 3)] {
            assert!(board.is_corner(c));
            assert_eq!(board.edge_kind(c), EdgeKind::Corner);
            for player in [Player::A, Player::B] {
                assert!(
                    board.is_on_near_edge(c, player) || board.is_on_far_edge(c, player),
                    "{c} not on an edge of {player:?}"
                );
            }
        }
    }

    #[test]
    fn test_edge_kind() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.edge_kind(Coord::new(1, 0)), EdgeKind::GoalA);
        assert_eq!(board.edge_kind(Coord::new(2, 3)), EdgeKind::GoalA);
        assert_eq!(board.edge_kind(Coord::new(0, 1)), EdgeKind::GoalB);
        assert_eq!(board.edge_kind(Coord::new(3, 2)), EdgeKind::GoalB);
        assert_eq!(board.edge_kind(Coord::new(1, 1)), EdgeKind::Interior);
    }

    #[test]
    fn test_index_roundtrip() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.index_of(Coord::new(3, 2)), Some(13));
        assert_eq!(board.coord_of(13), Some(Coord::new(3, 2)));
        assert_eq!(board.index_of(Coord::new(5, 0)), None);
        assert_eq!(board.coord_of(25), None);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3).unwrap();
        let coords: Vec<_> = board.empty_cells().collect();
        assert_eq!(coords.len(), 9);
        for (n, c) in coords.into_iter().enumerate() {
            assert!(!board.is_full());
            let player = if n % 2 == 0 { Player::A } else { Player::B };
            board.place(c, player).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }
}

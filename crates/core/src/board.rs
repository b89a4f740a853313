//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell holds either the empty
//! sentinel or a power-of-two tile. Uses a flat row-major vector for cache
//! locality. Coordinates are `(row, col)` with `(0, 0)` at the top-left.
//!
//! Every write goes through one path that keeps a running count of empty
//! cells, so "is the board full" and random spawning never need a scan to
//! find out how many free cells there are.

use rand::Rng;

use crate::config::is_tile_value;
use crate::error::{EngineError, EngineResult};
use crate::rng::draw_spawn;
use crate::types::Tile;

/// The game board - flat row-major storage plus a free-cell counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    empty: Tile,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Tile>,
    /// Number of cells currently holding `empty`
    free: usize,
}

impl Board {
    /// Create a new board with every cell set to `empty`
    pub fn new(width: usize, height: usize, empty: Tile) -> EngineResult<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::invalid_config(format!(
                "board dimensions must be positive, got {width}x{height}"
            )));
        }
        let len = width.checked_mul(height).ok_or_else(|| {
            EngineError::invalid_config(format!("a {width}x{height} board has too many cells"))
        })?;
        Ok(Self {
            width,
            height,
            empty,
            cells: vec![empty; len],
            free: len,
        })
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must be non-empty and equally long, and every cell must hold
    /// `empty` or a tile value.
    pub fn from_rows(rows: &[Vec<Tile>], empty: Tile) -> EngineResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut board = Self::new(width, height, empty)?;

        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(EngineError::invalid_config(format!(
                    "row {row} has {} cells, expected {width}",
                    values.len()
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                if value != empty && !is_tile_value(value) {
                    return Err(EngineError::invalid_config(format!(
                        "cell ({row}, {col}) holds {value}, which is not a tile"
                    )));
                }
                board.write(row * width + col, value);
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// The single write path; keeps `free` exact.
    #[inline]
    fn write(&mut self, idx: usize, value: Tile) {
        let old = std::mem::replace(&mut self.cells[idx], value);
        match (old == self.empty, value == self.empty) {
            (true, false) => self.free -= 1,
            (false, true) => self.free += 1,
            _ => {}
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The sentinel stored in cells without a tile
    pub fn empty_value(&self) -> Tile {
        self.empty
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Get cell at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`; returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.write(idx, value);
                true
            }
            None => false,
        }
    }

    /// In-bounds read used by the line scanner.
    #[inline]
    pub(crate) fn at(&self, (row, col): (usize, usize)) -> Tile {
        self.cells[row * self.width + col]
    }

    /// In-bounds write used by the line scanner.
    #[inline]
    pub(crate) fn put(&mut self, (row, col): (usize, usize), value: Tile) {
        let idx = row * self.width + col;
        self.write(idx, value);
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(self.empty)
    }

    /// Number of empty cells (O(1))
    pub fn free_count(&self) -> usize {
        self.free
    }

    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// True when no tile has been placed yet
    pub fn is_blank(&self) -> bool {
        self.free == self.cells.len()
    }

    /// Reset every cell to the empty sentinel
    pub fn clear(&mut self) {
        self.cells.fill(self.empty);
        self.free = self.cells.len();
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate the rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Largest tile on the board, if any
    pub fn highest_tile(&self) -> Option<Tile> {
        self.cells.iter().copied().filter(|&v| v != self.empty).max()
    }

    /// True if two row- or column-adjacent cells hold the same tile
    pub fn has_adjacent_pair(&self) -> bool {
        let empty = self.empty;
        let same = |a: Tile, b: Tile| a != empty && a == b;

        let by_rows = self
            .rows()
            .any(|row| row.windows(2).any(|pair| same(pair[0], pair[1])));
        if by_rows {
            return true;
        }

        (0..self.height.saturating_sub(1)).any(|row| {
            (0..self.width).any(|col| same(self.at((row, col)), self.at((row + 1, col))))
        })
    }

    /// False only when the board is full and nothing can merge
    pub fn moves_available(&self) -> bool {
        self.free > 0 || self.has_adjacent_pair()
    }

    /// Place a random 2 or 4 on a uniformly chosen empty cell.
    ///
    /// Returns the `(row, col, value)` placed, or `None` when the board is full.
    pub fn place_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize, Tile)> {
        if self.free == 0 {
            return None;
        }

        let (slot, value) = draw_spawn(rng, self.free);
        let empty = self.empty;
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == empty)
            .nth(slot)
            .map(|(idx, _)| idx)?;

        self.write(idx, value);
        Some((idx / self.width, idx % self.width, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::game_rng;

    fn scan_free(board: &Board) -> usize {
        board
            .cells()
            .iter()
            .filter(|&&v| v == board.empty_value())
            .count()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4, 3, 0).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_board_new_is_all_empty() {
        let board = Board::new(4, 4, 0).unwrap();
        assert_eq!(board.free_count(), 16);
        assert!(board.is_blank());
        assert!(board.cells().iter().all(|&v| v == 0));
        assert!(Board::new(0, 4, 0).is_err());
    }

    #[test]
    fn test_board_new_rejects_overflowing_size() {
        let err = Board::new(usize::MAX, 2, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
        assert!(Board::new(2, usize::MAX, 0).is_err());
    }

    #[test]
    fn test_set_tracks_free_count() {
        let mut board = Board::new(4, 4, 0).unwrap();

        assert!(board.set(1, 2, 8));
        assert_eq!(board.free_count(), 15);

        // Overwriting a tile with a tile leaves the count alone.
        assert!(board.set(1, 2, 16));
        assert_eq!(board.free_count(), 15);

        assert!(board.set(1, 2, 0));
        assert_eq!(board.free_count(), 16);

        assert!(!board.set(4, 0, 2));
        assert_eq!(board.free_count(), scan_free(&board));
    }

    #[test]
    fn test_custom_empty_sentinel() {
        let mut board = Board::new(2, 2, 1).unwrap();
        assert!(board.cells().iter().all(|&v| v == 1));
        board.set(0, 0, 2);
        assert_eq!(board.free_count(), 3);
        assert!(board.is_empty_at(1, 1));
        assert!(!board.is_empty_at(0, 0));
    }

    #[test]
    fn test_from_rows_validates_shape_and_values() {
        let board = Board::from_rows(&[vec![2, 0], vec![0, 4]], 0).unwrap();
        assert_eq!(board.free_count(), 2);
        assert_eq!(board.to_rows(), vec![vec![2, 0], vec![0, 4]]);

        assert!(Board::from_rows(&[vec![2, 0], vec![0]], 0).is_err());
        assert!(Board::from_rows(&[vec![3, 0]], 0).is_err());
        assert!(Board::from_rows(&[], 0).is_err());
    }

    #[test]
    fn test_adjacent_pairs() {
        let full_no_pairs =
            Board::from_rows(&[vec![2, 4], vec![4, 2]], 0).unwrap();
        assert!(!full_no_pairs.has_adjacent_pair());
        assert!(!full_no_pairs.moves_available());

        let row_pair = Board::from_rows(&[vec![2, 2], vec![4, 8]], 0).unwrap();
        assert!(row_pair.has_adjacent_pair());

        let col_pair = Board::from_rows(&[vec![2, 4], vec![2, 8]], 0).unwrap();
        assert!(col_pair.has_adjacent_pair());

        // Empty neighbours never count as a pair, but free cells still allow moves.
        let sparse = Board::from_rows(&[vec![0, 0], vec![2, 4]], 0).unwrap();
        assert!(!sparse.has_adjacent_pair());
        assert!(sparse.moves_available());
    }

    #[test]
    fn test_place_random_lands_on_empty_cell() {
        let mut rng = game_rng(Some(1));
        let mut board = Board::new(4, 4, 0).unwrap();

        for placed in 1..=16 {
            let before = board.clone();
            let (row, col, value) = board.place_random(&mut rng).unwrap();
            assert!(before.is_empty_at(row, col));
            assert!(value == 2 || value == 4);
            assert_eq!(board.get(row, col), Some(value));
            assert_eq!(board.free_count(), 16 - placed);
            assert_eq!(board.free_count(), scan_free(&board));
        }

        assert!(board.is_full());
        assert_eq!(board.place_random(&mut rng), None);
    }

    #[test]
    fn test_place_random_on_non_square_board() {
        let mut rng = game_rng(Some(5));
        let mut board = Board::new(5, 2, 0).unwrap();
        while board.place_random(&mut rng).is_some() {}
        assert!(board.is_full());
        assert!(board.cells().iter().all(|v| *v == 2 || *v == 4));
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut board = Board::from_rows(&[vec![2, 4], vec![8, 16]], 0).unwrap();
        assert!(board.is_full());
        assert_eq!(board.highest_tile(), Some(16));
        board.clear();
        assert!(board.is_blank());
        assert_eq!(board.highest_tile(), None);
    }
}

use crate::board::Board;
use crate::types::{GamePhase, Score, Tile};

/// Owned copy of everything a view needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Sentinel value of empty cells in `cells`
    pub empty: Tile,
    /// Row-major cell values
    pub cells: Vec<Tile>,
    pub score: Score,
    pub phase: GamePhase,
}

impl GameSnapshot {
    /// Overwrite this snapshot from a board, reusing the cell allocation.
    pub fn fill_from(&mut self, board: &Board, score: Score, phase: GamePhase) {
        self.width = board.width();
        self.height = board.height();
        self.empty = board.empty_value();
        self.cells.clear();
        self.cells.extend_from_slice(board.cells());
        self.score = score;
        self.phase = phase;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// The tile at `(row, col)`, or `None` for empty and out-of-bounds cells.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).filter(|&v| v != self.empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == self.empty).count()
    }

    pub fn highest_tile(&self) -> Option<Tile> {
        self.cells.iter().copied().filter(|&v| v != self.empty).max()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            empty: 0,
            cells: Vec::new(),
            score: 0,
            phase: GamePhase::Suspended,
        }
    }
}

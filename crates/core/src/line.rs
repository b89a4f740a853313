//! Direction lines - slide and merge along one row or column
//!
//! A move decomposes the board into direction lines: rows for Left/Right,
//! columns for Up/Down. Each line is read from the edge the pieces move
//! towards, so position 0 is always the cell a piece ends up in first.
//! [`line_cell`] maps `(line, position)` to board coordinates; the scanner in
//! [`compact_line`] only ever deals in positions.

use crate::board::Board;
use crate::types::{Direction, Score};

/// Result of compacting one or more lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// Sum of the pre-merge values of every merged pair
    pub score: Score,
    /// True if any piece slid or merged
    pub moved: bool,
}

impl LineOutcome {
    fn absorb(&mut self, other: LineOutcome) {
        self.score += other.score;
        self.moved |= other.moved;
    }
}

/// Number of direction lines on a `width x height` board
pub fn line_count(direction: Direction, width: usize, height: usize) -> usize {
    if direction.is_horizontal() {
        height
    } else {
        width
    }
}

/// Number of cells in each direction line
pub fn line_len(direction: Direction, width: usize, height: usize) -> usize {
    if direction.is_horizontal() {
        width
    } else {
        height
    }
}

/// Board `(row, col)` of position `pos` within direction line `line`.
///
/// Up scans each column top to bottom, Down bottom to top, Left each row left
/// to right, Right right to left.
#[inline]
pub fn line_cell(
    direction: Direction,
    line: usize,
    pos: usize,
    width: usize,
    height: usize,
) -> (usize, usize) {
    match direction {
        Direction::Up => (pos, line),
        Direction::Down => (height - 1 - pos, line),
        Direction::Left => (line, pos),
        Direction::Right => (line, width - 1 - pos),
    }
}

/// Slide and merge a single direction line in place.
///
/// One pass with three cursors: the scan position, the first free slot, and
/// the last placed piece that may still absorb an equal neighbour. A merged
/// piece drops out as a merge candidate, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
pub fn compact_line(board: &mut Board, direction: Direction, line: usize) -> LineOutcome {
    let (width, height) = (board.width(), board.height());
    let len = line_len(direction, width, height);
    let cell = |pos: usize| line_cell(direction, line, pos, width, height);
    let empty = board.empty_value();

    let mut outcome = LineOutcome::default();
    let mut scan = 0;
    let mut free_slot: Option<usize> = None;
    let mut mergeable: Option<usize> = None;

    while scan < len {
        let value = board.at(cell(scan));

        if value == empty {
            free_slot.get_or_insert(scan);
            scan += 1;
            continue;
        }

        match (mergeable, free_slot) {
            (Some(target), _) if board.at(cell(target)) == value => {
                board.put(cell(scan), empty);
                board.put(cell(target), value * 2);
                outcome.score += value;
                outcome.moved = true;
                mergeable = None;
                // Scan stays put: the cell just vacated is picked up as free next.
            }
            (_, Some(slot)) => {
                board.put(cell(slot), value);
                board.put(cell(scan), empty);
                outcome.moved = true;
                mergeable = Some(slot);
                free_slot = Some(slot + 1);
                scan += 1;
            }
            (_, None) => {
                mergeable = Some(scan);
                scan += 1;
            }
        }
    }

    outcome
}

/// Compact every direction line of the board.
pub fn shift_board(board: &mut Board, direction: Direction) -> LineOutcome {
    let lines = line_count(direction, board.width(), board.height());
    let mut outcome = LineOutcome::default();
    for line in 0..lines {
        outcome.absorb(compact_line(board, direction, line));
    }
    outcome
}

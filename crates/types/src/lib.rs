//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_WIDTH` | 4 | Columns |
//! | `DEFAULT_BOARD_HEIGHT` | 4 | Rows |
//! | `MAX_BOARD_DIM` | 64 | Largest accepted width or height |
//! | `DEFAULT_EMPTY_VALUE` | 0 | Sentinel stored in empty cells |
//! | `INITIAL_PIECES` | 2 | Tiles placed on every board reset |
//!
//! # Game Phases
//!
//! ```text
//!            resume (both sides operational)
//! Suspended ------------------------------> Active <--+
//!     ^                                      |  |     | reset
//!     +-------------- suspend ---------------+  |     |
//!                                               v     |
//!                        no moves left ---> Endgame --+
//!
//! any phase --- close ---> Terminated
//! ```
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GamePhase, DEFAULT_BOARD_WIDTH};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//!
//! assert_eq!(GamePhase::default(), GamePhase::Suspended);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 4);
//! ```

/// Board width in cells (4 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 4;

/// Board height in cells (4 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 4;

/// Largest board width or height a game may be configured with
pub const MAX_BOARD_DIM: usize = 64;

/// Value stored in a cell that holds no tile
pub const DEFAULT_EMPTY_VALUE: Tile = 0;

/// Number of tiles placed whenever the board is reset
pub const INITIAL_PIECES: usize = 2;

/// Tile exponents a freshly spawned piece can take (2^1 = 2, 2^2 = 4).
pub const SPAWN_EXPONENTS: std::ops::RangeInclusive<u32> = 1..=2;

/// Value of a single board cell (empty sentinel or a power of two).
pub type Tile = u64;

/// Accumulated merge score.
pub type Score = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_defaults() {
        assert_eq!(DEFAULT_BOARD_WIDTH, 4);
        assert_eq!(DEFAULT_BOARD_HEIGHT, 4);
        assert_eq!(DEFAULT_EMPTY_VALUE, 0);
        assert_eq!(INITIAL_PIECES, 2);
        assert!(MAX_BOARD_DIM >= DEFAULT_BOARD_WIDTH.max(DEFAULT_BOARD_HEIGHT));
        assert_eq!(SPAWN_EXPONENTS.map(|k| 1u64 << k).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn direction_round_trips_through_names() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn phase_accepts_input_only_when_active() {
        assert!(GamePhase::Active.accepts_moves());
        assert!(!GamePhase::Suspended.accepts_moves());
        assert!(!GamePhase::Endgame.accepts_moves());
        assert!(!GamePhase::Terminated.accepts_moves());
    }
}

/// Movement directions for the pieces on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for Left/Right, whose direction lines are rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Phase of the game state machine
///
/// Exactly one phase is current at any time. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Waiting for both collaborators to become operational.
    #[default]
    Suspended,
    /// Moves are accepted.
    Active,
    /// No moves are left; only restart or close do anything.
    Endgame,
    /// The game is closed for good.
    Terminated,
}

impl GamePhase {
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GamePhase::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Suspended => "suspended",
            GamePhase::Active => "active",
            GamePhase::Endgame => "endgame",
            GamePhase::Terminated => "terminated",
        }
    }
}

/// Input actions decoded from the terminal
///
/// These are produced by the input layer and routed by the dispatcher either
/// to the engine or to the output overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Direction),
    Restart,
    ToggleHelp,
    HelpPageUp,
    HelpPageDown,
    Quit,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Any other key; only meaningful for dismissing the intro splash.
    Other,
}

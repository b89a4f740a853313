//! Game configuration.
//!
//! Defaults give the classic 4x4 board. Every field can be overridden from the
//! environment:
//!
//! - `TUI2048_BOARD_WIDTH`: number of columns (default 4)
//! - `TUI2048_BOARD_HEIGHT`: number of rows (default 4)
//! - `TUI2048_SEED`: RNG seed for reproducible games (default: entropy)
//! - `TUI2048_LOG_PATH`: file that receives log output (default: no logging)
//!
//! Values that fail to parse fall back to the default. Values that parse but
//! make no sense (a zero-sized or oversized board) are rejected by [`GameConfig::validate`].

use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};
use crate::types::{
    Tile, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_EMPTY_VALUE, INITIAL_PIECES,
    MAX_BOARD_DIM,
};

pub const ENV_BOARD_WIDTH: &str = "TUI2048_BOARD_WIDTH";
pub const ENV_BOARD_HEIGHT: &str = "TUI2048_BOARD_HEIGHT";
pub const ENV_SEED: &str = "TUI2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI2048_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Sentinel stored in cells without a tile.
    pub empty_value: Tile,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            empty_value: DEFAULT_EMPTY_VALUE,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (the environment, in practice).
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<usize>().ok());

        let board_width = parse(ENV_BOARD_WIDTH).unwrap_or(defaults.board_width);
        let board_height = parse(ENV_BOARD_HEIGHT).unwrap_or(defaults.board_height);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse::<u64>().ok());

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            board_width,
            board_height,
            seed,
            log_path,
            ..defaults
        }
    }

    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_empty_value(mut self, empty_value: Tile) -> Self {
        self.empty_value = empty_value;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the engine cannot play on.
    pub fn validate(&self) -> EngineResult<()> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(EngineError::invalid_config(format!(
                "board dimensions must be positive, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.board_width > MAX_BOARD_DIM || self.board_height > MAX_BOARD_DIM {
            return Err(EngineError::invalid_config(format!(
                "board dimensions are capped at {MAX_BOARD_DIM}, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        let cells = self.board_width.checked_mul(self.board_height);
        if cells.map_or(true, |n| n < INITIAL_PIECES) {
            return Err(EngineError::invalid_config(format!(
                "a {}x{} board cannot hold the {} starting pieces",
                self.board_width, self.board_height, INITIAL_PIECES
            )));
        }
        if is_tile_value(self.empty_value) {
            return Err(EngineError::invalid_config(format!(
                "empty value {} collides with a tile value",
                self.empty_value
            )));
        }
        Ok(())
    }
}

/// True for values a tile can hold: powers of two, 2 and up.
pub fn is_tile_value(value: Tile) -> bool {
    value >= 2 && value.is_power_of_two()
}

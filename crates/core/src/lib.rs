//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and the phase state
//! machine. It has **no dependencies** on terminal rendering or input
//! decoding; those layers are reached only through the [`OutputSink`] and
//! [`InputSource`] traits.
//!
//! - **Deterministic**: a fixed seed reproduces the same spawns
//! - **Testable**: collaborators are plain trait objects or test doubles
//! - **Portable**: runs headless just as well as in a terminal
//!
//! # Module Structure
//!
//! - [`board`]: the grid and its exact free-cell counter
//! - [`line`]: direction lines, slide and merge
//! - [`engine`]: [`GameEngine`], score and phase transitions
//! - [`rng`]: random piece spawning
//! - [`collab`]: output sink and input source interfaces
//! - [`config`]: board size, sentinel, seed, log path
//! - [`snapshot`]: owned view of the game for renderers
//!
//! # Game Rules
//!
//! - A move slides every piece towards one edge; two equal pieces that meet
//!   merge into one of twice the value, at most once per move
//! - Each merge adds the value of one of the merged pieces to the score
//! - A move that changes the board spawns one new 2 or 4 on a random free cell
//! - The game ends when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameEngine, GameSnapshot, InputSource, OutputSink};
//! use tui_2048_types::{Direction, GamePhase};
//!
//! struct Headless;
//!
//! impl OutputSink for Headless {
//!     fn update_game_state(&mut self, _state: &GameSnapshot) {}
//!     fn is_operational(&self) -> bool { true }
//!     fn show_endgame_message(&mut self) {}
//!     fn hide_endgame_message(&mut self) {}
//!     fn open_help(&mut self) {}
//!     fn close_help(&mut self) {}
//! }
//!
//! impl InputSource for Headless {
//!     fn is_operational(&self) -> bool { true }
//! }
//!
//! let mut game = GameEngine::new(&GameConfig::default().with_seed(7)).unwrap();
//! game.attach_output(Headless);
//! game.attach_input(Headless);
//!
//! assert!(game.resume_game());
//! assert_eq!(game.phase(), GamePhase::Active);
//! assert_eq!(game.board().free_count(), 14);
//!
//! game.move_pieces(Direction::Left);
//! game.close_game();
//! assert!(!game.is_active());
//! ```

pub mod board;
pub mod collab;
pub mod config;
pub mod engine;
pub mod error;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collab::{InputSource, OutputSink};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::{EngineError, EngineResult};
pub use line::{compact_line, line_cell, shift_board, LineOutcome};
pub use snapshot::GameSnapshot;

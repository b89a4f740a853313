//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::InputAction`] and provides the
//! engine's input source, which blocks on the terminal for the next event.

pub mod map;
pub mod source;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use source::TerminalInput;

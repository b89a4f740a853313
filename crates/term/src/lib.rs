//! Terminal rendering for the 2048 game.
//!
//! Everything draws into a [`FrameBuffer`] first; [`TerminalRenderer`] then
//! flushes only what changed. [`TerminalOutput`] is the engine-facing sink that
//! keeps the latest board snapshot and overlay state between frames.

pub mod fb;
pub mod game_view;
pub mod help;
pub mod output;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{BoardLayout, GameView, Overlay, Scene, Viewport};
pub use help::{wrap_text, HelpPager, HELP_TEXT};
pub use output::TerminalOutput;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

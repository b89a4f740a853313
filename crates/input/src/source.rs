//! The engine's input source, backed by the real terminal.

use std::io;

use crossterm::{event, terminal};
use log::trace;

use crate::core::InputSource;
use crate::map::map_event;
use crate::types::InputAction;

/// Reads terminal events one at a time.
///
/// Operational only while the terminal is in raw mode, since keys are
/// line-buffered otherwise and single keystrokes never arrive.
#[derive(Debug, Default)]
pub struct TerminalInput {
    _private: (),
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the next event that maps to an action.
    pub fn next_action(&mut self) -> io::Result<InputAction> {
        loop {
            let ev = event::read()?;
            if let Some(action) = map_event(&ev) {
                trace!("input {:?} -> {:?}", ev, action);
                return Ok(action);
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn is_operational(&self) -> bool {
        terminal::is_raw_mode_enabled().unwrap_or(false)
    }
}

//! Collaborator interfaces - what the engine calls back into
//!
//! The engine binds exactly one output sink and one input source. Both are
//! owned by the engine and reached through `output_mut()`/`input_mut()` by the
//! surrounding program, so nothing is shared and nothing needs locking.

use crate::snapshot::GameSnapshot;

/// Receives game updates and overlay lifecycle hooks
pub trait OutputSink {
    /// The board or score changed; `state` is the complete new picture.
    fn update_game_state(&mut self, state: &GameSnapshot);

    /// False while a blocking overlay (intro, help) is displayed.
    fn is_operational(&self) -> bool;

    fn show_endgame_message(&mut self);

    fn hide_endgame_message(&mut self);

    fn open_help(&mut self);

    fn close_help(&mut self);
}

/// Supplies user input; only its readiness matters to the engine
pub trait InputSource {
    fn is_operational(&self) -> bool;
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn update_game_state(&mut self, state: &GameSnapshot) {
        (**self).update_game_state(state)
    }

    fn is_operational(&self) -> bool {
        (**self).is_operational()
    }

    fn show_endgame_message(&mut self) {
        (**self).show_endgame_message()
    }

    fn hide_endgame_message(&mut self) {
        (**self).hide_endgame_message()
    }

    fn open_help(&mut self) {
        (**self).open_help()
    }

    fn close_help(&mut self) {
        (**self).close_help()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn is_operational(&self) -> bool {
        (**self).is_operational()
    }
}

//! TerminalOutput: the engine's output sink.
//!
//! Holds the latest snapshot and overlay state and marks itself dirty on every
//! change. Drawing is left to the caller's loop (`render_into` + a
//! [`crate::TerminalRenderer`]) so the engine never waits on terminal I/O.

use log::debug;

use crate::core::{GameSnapshot, OutputSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Overlay, Scene, Viewport};
use crate::help::HelpPager;

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    view: GameView,
    viewport: Viewport,
    snapshot: GameSnapshot,
    intro: bool,
    endgame: bool,
    help: HelpPager,
    dirty: bool,
}

impl TerminalOutput {
    /// Start with the intro splash up; it blocks the game until dismissed.
    pub fn new(viewport: Viewport) -> Self {
        let mut out = Self {
            view: GameView::default(),
            viewport,
            snapshot: GameSnapshot::default(),
            intro: true,
            endgame: false,
            help: HelpPager::default(),
            dirty: true,
        };
        out.relayout_help();
        out
    }

    /// Skip the intro splash.
    pub fn without_intro(mut self) -> Self {
        self.intro = false;
        self
    }

    pub fn intro_open(&self) -> bool {
        self.intro
    }

    pub fn help_open(&self) -> bool {
        self.help.is_open()
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dismiss_intro(&mut self) {
        if self.intro {
            self.intro = false;
            self.dirty = true;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.relayout_help();
        self.dirty = true;
    }

    pub fn help_page_down(&mut self) {
        self.help.page_down();
        self.dirty = true;
    }

    pub fn help_page_up(&mut self) {
        self.help.page_up();
        self.dirty = true;
    }

    pub fn help_scroll(&mut self, lines: isize) {
        self.help.scroll(lines);
        self.dirty = true;
    }

    /// Returns whether a redraw is due, and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn overlay(&self) -> Overlay<'_> {
        if self.help.is_open() {
            Overlay::Help(&self.help)
        } else if self.intro {
            Overlay::Intro
        } else if self.endgame {
            Overlay::Endgame
        } else {
            Overlay::None
        }
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let scene = Scene {
            snapshot: &self.snapshot,
            overlay: self.overlay(),
        };
        self.view.render_into(&scene, self.viewport, fb);
    }

    fn relayout_help(&mut self) {
        let area = self
            .view
            .help_text_area(self.snapshot.width, self.snapshot.height, self.viewport);
        self.help.layout(area.w, area.h);
    }
}

impl OutputSink for TerminalOutput {
    fn update_game_state(&mut self, state: &GameSnapshot) {
        let dims_changed = (state.width, state.height) != (self.snapshot.width, self.snapshot.height);
        self.snapshot.clone_from(state);
        if dims_changed {
            self.relayout_help();
        }
        self.dirty = true;
    }

    fn is_operational(&self) -> bool {
        !self.intro && !self.help.is_open()
    }

    fn show_endgame_message(&mut self) {
        debug!("endgame message shown");
        self.endgame = true;
        self.dirty = true;
    }

    fn hide_endgame_message(&mut self) {
        self.endgame = false;
        self.dirty = true;
    }

    fn open_help(&mut self) {
        self.help.open();
        self.relayout_help();
        self.dirty = true;
    }

    fn close_help(&mut self) {
        self.help.close();
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamePhase;

    fn snap() -> GameSnapshot {
        GameSnapshot {
            width: 4,
            height: 4,
            empty: 0,
            cells: vec![0; 16],
            score: 0,
            phase: GamePhase::Active,
        }
    }

    #[test]
    fn intro_blocks_until_dismissed() {
        let mut out = TerminalOutput::new(Viewport::new(80, 24));
        assert!(!out.is_operational());
        assert!(matches!(out.overlay(), Overlay::Intro));

        out.dismiss_intro();
        assert!(out.is_operational());
        assert!(matches!(out.overlay(), Overlay::None));
    }

    #[test]
    fn help_blocks_and_takes_precedence() {
        let mut out = TerminalOutput::new(Viewport::new(80, 24)).without_intro();
        out.show_endgame_message();
        out.open_help();
        assert!(!out.is_operational());
        assert!(matches!(out.overlay(), Overlay::Help(_)));

        out.close_help();
        assert!(out.is_operational());
        assert!(matches!(out.overlay(), Overlay::Endgame));

        out.hide_endgame_message();
        assert!(matches!(out.overlay(), Overlay::None));
    }

    #[test]
    fn updates_mark_dirty_once() {
        let mut out = TerminalOutput::new(Viewport::new(80, 24)).without_intro();
        assert!(out.take_dirty());
        assert!(!out.take_dirty());

        let mut state = snap();
        state.score = 36;
        out.update_game_state(&state);
        assert!(out.take_dirty());
        assert_eq!(out.snapshot().score, 36);
        assert!(!out.take_dirty());
    }

    #[test]
    fn render_draws_into_viewport() {
        let mut out = TerminalOutput::new(Viewport::new(60, 24)).without_intro();
        out.update_game_state(&snap());
        let mut fb = FrameBuffer::new(1, 1);
        out.render_into(&mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 24));

        out.resize(100, 30);
        out.render_into(&mut fb);
        assert_eq!((fb.width(), fb.height()), (100, 30));
    }
}

//! Game engine - board, score, and the phase state machine
//!
//! Every public action checks the current [`GamePhase`] first and silently
//! does nothing when it does not apply. The engine never blocks and never
//! spawns work; the caller drives it one action per input event.
//!
//! Output notifications are always sent after the board mutation they report
//! has completed.

use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::board::Board;
use crate::collab::{InputSource, OutputSink};
use crate::config::GameConfig;
use crate::error::EngineResult;
use crate::line::shift_board;
use crate::rng::game_rng;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GamePhase, Score, Tile, INITIAL_PIECES};

/// Complete game state plus the two bound collaborators
pub struct GameEngine<O, I> {
    board: Board,
    phase: GamePhase,
    score: Score,
    rng: StdRng,
    output: Option<O>,
    input: Option<I>,
}

impl<O: OutputSink, I: InputSource> GameEngine<O, I> {
    /// Create a suspended engine with an empty board.
    ///
    /// No tiles are placed and nobody is notified until collaborators are
    /// attached and the game is resumed.
    pub fn new(config: &GameConfig) -> EngineResult<Self> {
        config.validate()?;
        let board = Board::new(config.board_width, config.board_height, config.empty_value)?;
        debug!(
            "engine created: {}x{} board, empty={}, seeded={}",
            config.board_width,
            config.board_height,
            config.empty_value,
            config.seed.is_some()
        );

        Ok(Self {
            board,
            phase: GamePhase::Suspended,
            score: 0,
            rng: game_rng(config.seed),
            output: None,
            input: None,
        })
    }

    /// Bind the output sink, returning the one it replaces.
    pub fn attach_output(&mut self, output: O) -> Option<O> {
        self.output.replace(output)
    }

    /// Bind the input source, returning the one it replaces.
    pub fn attach_input(&mut self, input: I) -> Option<I> {
        self.input.replace(input)
    }

    // Queries

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True until the game is closed; the main loop runs while this holds.
    pub fn is_active(&self) -> bool {
        self.phase != GamePhase::Terminated
    }

    /// `(width, height)` of the board
    pub fn board_dimensions(&self) -> (usize, usize) {
        (self.board.width(), self.board.height())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_state(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(&self.board, self.score, self.phase);
    }

    /// The sentinel that marks empty cells
    pub fn free_tile_value(&self) -> Tile {
        self.board.empty_value()
    }

    pub fn current_score(&self) -> Score {
        self.score
    }

    pub fn moves_available(&self) -> bool {
        self.board.moves_available()
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> Option<&mut O> {
        self.output.as_mut()
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut I> {
        self.input.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    // Actions

    /// Leave `Suspended` once both collaborators are operational.
    ///
    /// The first resume seeds the blank board with its starting pieces; later
    /// resumes (after help was closed) keep the board as it was. Returns true
    /// if the phase changed.
    pub fn resume_game(&mut self) -> bool {
        if self.phase != GamePhase::Suspended {
            return false;
        }
        if !self.collaborators_operational() {
            debug!("resume deferred: collaborators not operational");
            return false;
        }

        if self.board.is_blank() {
            self.reset_board();
        }
        self.phase = GamePhase::Active;
        info!("game resumed");
        self.notify_output();
        true
    }

    /// Park an active game, keeping the board.
    pub fn suspend_game(&mut self) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }
        self.phase = GamePhase::Suspended;
        info!("game suspended");
        true
    }

    /// Start over with a fresh board. Works from `Active` and `Endgame`.
    pub fn reset_game(&mut self) -> bool {
        match self.phase {
            GamePhase::Active => {}
            GamePhase::Endgame => {
                self.phase = GamePhase::Active;
                if let Some(output) = self.output.as_mut() {
                    output.hide_endgame_message();
                }
            }
            GamePhase::Suspended | GamePhase::Terminated => return false,
        }

        self.reset_board();
        info!("game reset");
        self.notify_output();
        true
    }

    /// Close the game for good, from any phase.
    pub fn close_game(&mut self) {
        if self.phase != GamePhase::Terminated {
            info!("game closed (was {}), score {}", self.phase.as_str(), self.score);
        }
        self.phase = GamePhase::Terminated;
    }

    /// Slide and merge every piece towards `direction`.
    ///
    /// A move that changes nothing spawns nothing and notifies nobody. The
    /// end-of-game check runs either way. Returns true if anything moved.
    pub fn move_pieces(&mut self, direction: Direction) -> bool {
        if !self.phase.accepts_moves() {
            return false;
        }

        let outcome = shift_board(&mut self.board, direction);
        self.score += outcome.score;

        if outcome.moved {
            debug!(
                "moved {}: +{} (score {})",
                direction.as_str(),
                outcome.score,
                self.score
            );
            self.spawn_piece();
            self.notify_output();
        } else {
            debug!("move {} changed nothing", direction.as_str());
        }

        if !self.board.moves_available() {
            self.enter_endgame();
        }

        outcome.moved
    }

    /// Show help; an active game is suspended while it is open.
    pub fn open_help(&mut self) {
        if self.phase == GamePhase::Terminated {
            return;
        }
        self.suspend_game();
        if let Some(output) = self.output.as_mut() {
            output.open_help();
        }
    }

    /// Hide help and resume the game if it was suspended for it.
    pub fn close_help(&mut self) {
        if self.phase == GamePhase::Terminated {
            return;
        }
        if let Some(output) = self.output.as_mut() {
            output.close_help();
        }
        self.resume_game();
    }

    // Internals

    fn collaborators_operational(&self) -> bool {
        let output_ready = self.output.as_ref().is_some_and(|o| o.is_operational());
        let input_ready = self.input.as_ref().is_some_and(|i| i.is_operational());
        output_ready && input_ready
    }

    /// Clear the board, place the starting pieces, zero the score.
    fn reset_board(&mut self) {
        self.board.clear();
        for _ in 0..INITIAL_PIECES {
            self.spawn_piece();
        }
        self.score = 0;
    }

    fn spawn_piece(&mut self) {
        match self.board.place_random(&mut self.rng) {
            Some((row, col, value)) => debug!("spawned {value} at ({row}, {col})"),
            None => warn!("spawn requested on a full board"),
        }
    }

    fn enter_endgame(&mut self) {
        self.phase = GamePhase::Endgame;
        info!(
            "no moves left, final score {}, best tile {}",
            self.score,
            self.board.highest_tile().unwrap_or_default()
        );
        if let Some(output) = self.output.as_mut() {
            output.show_endgame_message();
        }
    }

    fn notify_output(&mut self) {
        if self.output.is_none() {
            return;
        }
        let snap = self.board_state();
        if let Some(output) = self.output.as_mut() {
            output.update_game_state(&snap);
        }
    }
}

//! Routes one input action to the engine or the overlays.
//!
//! At most one engine call is made per action. Overlays that block the game
//! (intro splash, help) swallow keys before the engine sees them.

use log::trace;

use crate::core::{GameEngine, InputSource};
use crate::term::TerminalOutput;
use crate::types::{Direction, GamePhase, InputAction};

/// Apply `action`, then retry resuming a suspended game.
pub fn dispatch<I: InputSource>(engine: &mut GameEngine<TerminalOutput, I>, action: InputAction) {
    trace!("dispatch {:?} in {}", action, engine.phase().as_str());

    if let InputAction::Resize(width, height) = action {
        if let Some(output) = engine.output_mut() {
            output.resize(width, height);
        }
    } else {
        let (intro, help) = engine
            .output()
            .map_or((false, false), |o| (o.intro_open(), o.help_open()));

        if intro {
            dispatch_intro(engine, action);
        } else if help {
            dispatch_help(engine, action);
        } else {
            dispatch_game(engine, action);
        }
    }

    if engine.phase() == GamePhase::Suspended {
        engine.resume_game();
    }
}

fn dispatch_intro<I: InputSource>(engine: &mut GameEngine<TerminalOutput, I>, action: InputAction) {
    match action {
        InputAction::Quit => engine.close_game(),
        _ => {
            if let Some(output) = engine.output_mut() {
                output.dismiss_intro();
            }
        }
    }
}

fn dispatch_help<I: InputSource>(engine: &mut GameEngine<TerminalOutput, I>, action: InputAction) {
    match action {
        InputAction::ToggleHelp => engine.close_help(),
        InputAction::Quit => engine.close_game(),
        InputAction::HelpPageUp => {
            if let Some(output) = engine.output_mut() {
                output.help_page_up();
            }
        }
        InputAction::HelpPageDown => {
            if let Some(output) = engine.output_mut() {
                output.help_page_down();
            }
        }
        InputAction::Move(direction) => {
            let lines = match direction {
                Direction::Up | Direction::Left => -1,
                Direction::Down | Direction::Right => 1,
            };
            if let Some(output) = engine.output_mut() {
                output.help_scroll(lines);
            }
        }
        _ => {}
    }
}

fn dispatch_game<I: InputSource>(engine: &mut GameEngine<TerminalOutput, I>, action: InputAction) {
    match action {
        InputAction::Move(direction) => {
            engine.move_pieces(direction);
        }
        InputAction::Restart => {
            engine.reset_game();
        }
        InputAction::ToggleHelp => engine.open_help(),
        InputAction::Quit => engine.close_game(),
        _ => {}
    }
}

//! Terminal 2048 runner (default binary).
//!
//! Blocks on the terminal for one event at a time, hands it to the
//! dispatcher, and redraws only when the output sink reports a change.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::terminal;
use env_logger::{Builder, Env, Target};
use log::{error, info};

use tui_2048::core::{GameConfig, GameEngine};
use tui_2048::dispatch;
use tui_2048::input::TerminalInput;
use tui_2048::term::{FrameBuffer, TerminalOutput, TerminalRenderer, Viewport};
use tui_2048::types::{InputAction, Score};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(score) => {
            println!("Final score: {score}");
            Ok(())
        }
        Err(err) => {
            error!("game aborted: {err:#}");
            Err(err)
        }
    }
}

/// Logging goes to a file or nowhere; stdout belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<Score> {
    let (w, h) = terminal::size().unwrap_or((80, 24));

    let mut engine: GameEngine<TerminalOutput, TerminalInput> = GameEngine::new(config)?;
    engine.attach_output(TerminalOutput::new(Viewport::new(w, h)));
    engine.attach_input(TerminalInput::new());
    info!(
        "starting {}x{} game in a {}x{} terminal",
        config.board_width, config.board_height, w, h
    );

    // Blocked by the intro splash; the first key resumes.
    engine.resume_game();

    let mut fb = FrameBuffer::new(w, h);
    while engine.is_active() {
        if let Some(output) = engine.output_mut() {
            if output.take_dirty() {
                output.render_into(&mut fb);
                term.draw(&fb)?;
            }
        }

        let Some(input) = engine.input_mut() else {
            break;
        };
        let action = input.next_action()?;
        if matches!(action, InputAction::Resize(..)) {
            term.invalidate();
        }
        dispatch(&mut engine, action);
    }

    Ok(engine.current_score())
}

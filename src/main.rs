//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! The loop blocks on the next terminal event; nothing happens between keys.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Builder, Env, Target};
use log::info;

use tui_2048::core::{GameConfig, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut game_state = GameState::new(&config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let grid = game_state.grid();
    if game_state.game_over() {
        println!("Game Over! Best tile: {}", grid.max_tile());
    } else {
        println!("Best tile: {}", grid.max_tile());
    }
    Ok(())
}

/// Log to `TUI_2048_LOG_PATH` when set; otherwise only warnings reach stderr,
/// since anything printed there lands on top of the game screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let default_filter = if config.log_path.is_some() { "info" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("failed to initialize logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game_state.apply_action(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

//! Terminal Concentration runner (default binary).
//!
//! Mouse clicks or the keyboard cursor flip cards; the game clock advances
//! one tick per fixed quantum. Rendering goes through the framebuffer view,
//! redrawn only when something changed.

use std::env;
use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_concentration::core::{GameConfig, GameSnapshot, GameState};
use tui_concentration::input::{handle_key_event, handle_mouse_event, should_quit, CursorHandler};
use tui_concentration::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_concentration::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    if let Err(err) = config.validate() {
        eprintln!("[Config] {} ({})", err, err.code());
        return Err(err).context("invalid game configuration");
    }
    let game = GameState::new(config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, game));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// File logging, enabled by `CONCENTRATION_LOG_PATH`.
///
/// The terminal is in raw mode on the alternate screen while playing, so
/// nothing is logged to stderr.
fn init_logging() -> Result<()> {
    let Some(path) = env::var("CONCENTRATION_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("open log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = CursorHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Some(cursor.position()), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit after {} ticks", game.elapsed_ticks());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        dirty = true;
                    } else {
                        let before = cursor.position();
                        if let Some(action) = cursor.handle_key_press(key.code) {
                            game.apply_action(action);
                            dirty = true;
                        }
                        dirty |= cursor.position() != before;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = handle_mouse_event(mouse, &view.geometry(viewport)) {
                        cursor.follow(action);
                        game.apply_action(action);
                        dirty = true;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Catch up on missed quanta so the clock stays in step with wall time.
        while last_tick.elapsed() >= tick {
            last_tick += tick;
            game.on_tick();
            dirty = true;
        }
    }
}

//! Terminal block-fall runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings from the environment, then runs a fixed-rate
//! frame loop: poll input, apply commands, advance gravity, redraw.
//! Logging goes to `BLOCKFALL_LOG_PATH` when set, since stderr shares the
//! terminal with the game.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_blockfall::core::GameSnapshot;
use tui_blockfall::engine::{Session, SessionConfig};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FPS;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let game = config.new_game()?;
    let mut session = Session::new(game);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e:#}");
    }

    let stats = session.stats();
    info!(
        "exiting after {} games, {} rows cleared, best score {}",
        stats.games, stats.rows_cleared, stats.best_score
    );
    result
}

fn init_logging(config: &SessionConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let frame_time = Duration::from_millis(1000 / u64::from(FPS));

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_frame = Instant::now();

    loop {
        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        session.tick();
        next_frame += frame_time;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

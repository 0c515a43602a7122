//! Terminal runner (default binary).
//!
//! Reads the configuration, optionally installs a file logger, then runs the
//! frame loop: render, poll input until the next tick, advance the clock.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use well_tetris::config::GameConfig;
use well_tetris::core::{GameSnapshot, GameState, SimpleRng};
use well_tetris::input::{handle_key_event, should_quit};
use well_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use well_tetris::types::TICK_MS;

/// How long the banner stays up after a game over.
const GAME_OVER_BANNER_MS: u32 = 1500;

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        width = config.width,
        height = config.height,
        drop_interval_ms = config.drop_interval_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "exiting");
    result
}

/// The game owns stdout, so logs only go to a file, and only when asked.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<()> {
    let mut game = GameState::with_source(config.width, config.height, SimpleRng::new(seed))
        .with_drop_interval_ms(config.drop_interval_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut banner_ms: u32 = 0;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let banner = (banner_ms > 0).then_some("GAME OVER");
        view.render_into_with_banner(&snap, banner, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!(action = action.as_str(), "input");
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.tick(elapsed_ms);
            banner_ms = banner_ms.saturating_sub(elapsed_ms);
        }

        if let Some(lock) = game.take_last_event() {
            if lock.game_over {
                banner_ms = GAME_OVER_BANNER_MS;
            }
        }
    }
}

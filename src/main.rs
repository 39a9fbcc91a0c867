//! Terminal platformer runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget/layout library).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_platformer::core::{GameSession, GameSnapshot};
use tui_platformer::input::{should_quit, InputHandler};
use tui_platformer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_platformer::types::TICK_MS;
use tui_platformer::{logging, RunnerConfig};

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("runner stopped: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: RunnerConfig) -> Result<()> {
    // With key release reporting the held state is exact and needs no timeout.
    let key_release_timeout_ms = if term.supports_release_events() {
        None
    } else {
        Some(config.key_release_timeout_ms)
    };
    let mut input = InputHandler::new().with_key_release_timeout_ms(key_release_timeout_ms);

    let seed = config.game.seed.unwrap_or_else(clock_seed);
    log::info!(
        "starting: seed={} key_release_timeout_ms={:?}",
        seed,
        key_release_timeout_ms
    );
    let mut session = GameSession::new(config.game, seed);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    input.handle_key_event(key);
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                Event::FocusLost => input.reset(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();

        for action in input.drain_pressed() {
            session.apply_action(action);
        }
        if session.exit_requested() {
            log::info!("exit requested from {}", session.screen().as_str());
            return Ok(());
        }

        session.tick(input.horizontal());

        // Render.
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

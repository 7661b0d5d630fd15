//! Terminal arithmetic quiz (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Wall time is fed
//! into the engine's countdown once per frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_quiz::app::App;
use tui_quiz::config::AppConfig;
use tui_quiz::input::{handle_key_event, should_quit};
use tui_quiz::telemetry::init_tracing;
use tui_quiz::term::{FrameBuffer, QuizView, TerminalRenderer, Viewport};
use tui_quiz::types::FRAME_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if init_tracing(&config.log)? {
        for warning in &config.warnings {
            warn!("{warning}");
        }
    }
    info!(
        seed = config.seed,
        difficulty = config.difficulty.as_str(),
        "quiz starting"
    );

    let mut app = App::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    let finished = app.finish();
    result.and(finished)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = QuizView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    // Time is fed as the difference between the clock and what the engine
    // has already seen, so rounding never accumulates.
    let clock = Instant::now();
    let mut fed_ms: u64 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.screen(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Sleep until the next countdown tick; poll at frame rate while idle.
        let timeout = app
            .engine()
            .until_next_tick_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(frame);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(input) = handle_key_event(key) {
                        app.handle_input(input);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now_ms = clock.elapsed().as_millis() as u64;
        let delta = now_ms.saturating_sub(fed_ms);
        if delta > 0 {
            fed_ms = now_ms;
            app.advance_time(delta.min(u32::MAX as u64) as u32);
        }
    }
}

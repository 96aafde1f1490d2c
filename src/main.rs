//! Terminal runner (default binary).
//!
//! Owns the Clock of the system: a gravity timer built on
//! `crossterm::event::poll` timeouts. Key events and gravity ticks funnel
//! into the engine one call at a time, so all state mutation is serial.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameEngine, SimpleRng};
use gridfall::input::{map_key_event, should_quit};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::{Direction, GameAction, GRAVITY_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut engine = GameEngine::new(Box::new(SimpleRng::new(seed)));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut paused = false;

    let gravity = Duration::from_millis(GRAVITY_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine, paused, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Wait for input at most until the next gravity tick is due.
        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key_event(key) {
                        dispatch(&mut engine, &mut paused, action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            // Pausing (or Over) stops ticks from reaching the engine.
            if !paused && !engine.is_over() {
                engine.tick();
            }
        }
    }
}

/// One engine call per discrete input event.
fn dispatch(engine: &mut GameEngine, paused: &mut bool, action: GameAction) {
    match action {
        GameAction::Pause => *paused = !*paused,
        GameAction::Restart => {
            engine.reset();
            *paused = false;
        }
        _ if *paused => {}
        GameAction::MoveLeft => {
            engine.attempt_move(Direction::Left);
        }
        GameAction::MoveRight => {
            engine.attempt_move(Direction::Right);
        }
        GameAction::MoveDown => {
            engine.attempt_move(Direction::Down);
        }
        GameAction::Rotate => {
            engine.attempt_rotate();
        }
    }
}

mod display;

use std::io::{stdout, BufWriter, Write};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use flappy_round::clock::{SpawnTimer, FRAME};
use flappy_round::compute::{draw_payload, handle_event, init_state, tick};
use flappy_round::entities::GameEvent;

/// Optional RNG seed for reproducible obstacle layouts.
const SEED_VAR: &str = "FLAPPY_SEED";

fn make_rng() -> StdRng {
    match std::env::var(SEED_VAR).ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(seed) => {
            log::info!("seeding obstacle RNG with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Translate a terminal key press into a round event, if it maps to one.
fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(GameEvent::FlapOrRestart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        _ => None,
    }
}

/// Drain every pending terminal event without blocking.
fn poll_input(events: &mut Vec<GameEvent>) -> std::io::Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            events.extend(map_key(key));
        }
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit event arrives.
///
/// Each frame: input events, then spawn-timer firings, are applied in that
/// order; the round ticks once; the payload is drawn; then we sleep out the
/// rest of the 60 Hz frame.
fn game_loop<W: Write>(out: &mut W, rng: &mut impl Rng) -> std::io::Result<()> {
    let mut state = init_state(0);
    let mut spawn_timer = SpawnTimer::default();
    let mut events: Vec<GameEvent> = Vec::new();
    let mut last_frame = Instant::now();

    log::info!("round started");

    loop {
        let frame_start = Instant::now();

        // ── Gather this frame's events ────────────────────────────────────────
        events.clear();
        poll_input(&mut events)?;
        let fired = spawn_timer.advance(frame_start - last_frame);
        last_frame = frame_start;
        events.extend((0..fired).map(|_| GameEvent::SpawnTimerFired));

        for &ev in &events {
            match handle_event(&state, ev, rng) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(()) => {
                    log::info!("quit requested (high score {})", state.high_score);
                    return Ok(());
                }
            }
        }

        state = tick(&state);

        display::render(out, &draw_payload(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle("Flappy Bird"))?;

    let mut rng = make_rng();
    let result = game_loop(&mut out, &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {e}");
    }
    result
}

/// Pure round-logic functions.
///
/// Every public function takes an immutable reference to its input (and,
/// where needed, an RNG handle) and returns a brand-new value.  Side effects
/// are limited to the injected RNG and log output.

use std::ops::ControlFlow;

use rand::Rng;

use crate::constants::{
    AVATAR_SIZE, AVATAR_START_Y, AVATAR_X, FLAP_IMPULSE, GAP_HEIGHT, GRAVITY, MAX_GAP_TOP,
    MIN_GAP_TOP, OBSTACLE_SPEED, OBSTACLE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::{
    Avatar, DrawPayload, GameEvent, Obstacle, ObstacleView, Rect, RoundState, RoundStatus,
};

// ── Geometry ─────────────────────────────────────────────────────────────────

pub fn avatar_rect(avatar: &Avatar) -> Rect {
    Rect {
        x: avatar.x,
        y: avatar.y,
        w: avatar.size,
        h: avatar.size,
    }
}

/// Blocking region from the screen top down to the gap.
pub fn upper_region(obstacle: &Obstacle) -> Rect {
    Rect {
        x: obstacle.x,
        y: 0.0,
        w: OBSTACLE_WIDTH,
        h: obstacle.gap_top,
    }
}

/// Blocking region from the bottom of the gap down to the screen bottom.
pub fn lower_region(obstacle: &Obstacle) -> Rect {
    let top = obstacle.gap_top + GAP_HEIGHT;
    Rect {
        x: obstacle.x,
        y: top,
        w: OBSTACLE_WIDTH,
        h: SCREEN_HEIGHT - top,
    }
}

/// Strict overlap: boxes that merely share an edge do not collide.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

// ── Avatar ───────────────────────────────────────────────────────────────────

pub fn new_avatar() -> Avatar {
    Avatar {
        x: AVATAR_X,
        y: AVATAR_START_Y,
        size: AVATAR_SIZE,
        velocity: 0.0,
    }
}

/// Gravity first, then position with the updated velocity.
pub fn integrate(avatar: &Avatar) -> Avatar {
    let velocity = avatar.velocity + GRAVITY;
    Avatar {
        y: avatar.y + velocity,
        velocity,
        ..avatar.clone()
    }
}

/// Overwrites velocity with the flap impulse; never accumulates.
pub fn flap(avatar: &Avatar) -> Avatar {
    Avatar {
        velocity: FLAP_IMPULSE,
        ..avatar.clone()
    }
}

pub fn reset_avatar(avatar: &Avatar) -> Avatar {
    Avatar {
        y: AVATAR_START_Y,
        velocity: 0.0,
        ..avatar.clone()
    }
}

// ── Obstacle stream ──────────────────────────────────────────────────────────

/// Append a new obstacle at `x` with a gap-top drawn uniformly from the
/// inclusive range `MIN_GAP_TOP..=MAX_GAP_TOP`.
pub fn spawn(obstacles: &[Obstacle], x: f32, rng: &mut impl Rng) -> Vec<Obstacle> {
    let gap_top = rng.gen_range(MIN_GAP_TOP..=MAX_GAP_TOP) as f32;
    log::debug!("spawning obstacle at x={x} gap_top={gap_top}");

    let mut obstacles = obstacles.to_vec();
    obstacles.push(Obstacle {
        x,
        gap_top,
        scored: false,
    });
    obstacles
}

pub fn advance(obstacles: &[Obstacle]) -> Vec<Obstacle> {
    obstacles
        .iter()
        .map(|o| Obstacle {
            x: o.x - OBSTACLE_SPEED,
            ..o.clone()
        })
        .collect()
}

/// Drop every obstacle whose right edge has crossed the left screen edge.
pub fn retire(obstacles: &[Obstacle]) -> Vec<Obstacle> {
    let kept: Vec<Obstacle> = obstacles
        .iter()
        .filter(|o| o.x + OBSTACLE_WIDTH >= 0.0)
        .cloned()
        .collect();
    if kept.len() < obstacles.len() {
        log::trace!("retired {} obstacle(s)", obstacles.len() - kept.len());
    }
    kept
}

// ── Round controller ─────────────────────────────────────────────────────────

/// Build a fresh active round, carrying over the process-wide high score.
pub fn init_state(high_score: u32) -> RoundState {
    RoundState {
        avatar: new_avatar(),
        obstacles: Vec::new(),
        score: 0,
        high_score,
        status: RoundStatus::Active,
        frame: 0,
    }
}

/// Leave game over: reset the avatar, clear obstacles, zero the score.
/// The high score is kept.
pub fn restart(state: &RoundState) -> RoundState {
    log::info!("round restarted (high score {})", state.high_score);
    RoundState {
        avatar: reset_avatar(&state.avatar),
        obstacles: Vec::new(),
        score: 0,
        status: RoundStatus::Active,
        frame: 0,
        ..state.clone()
    }
}

/// True when the avatar overlaps a blocking region or touches the top or
/// bottom screen edge.
pub fn is_fatal(avatar: &Avatar, obstacles: &[Obstacle]) -> bool {
    let bird = avatar_rect(avatar);
    if bird.y <= 0.0 || bird.y + bird.h >= SCREEN_HEIGHT {
        return true;
    }
    obstacles
        .iter()
        .any(|o| overlaps(&bird, &upper_region(o)) || overlaps(&bird, &lower_region(o)))
}

/// Apply one input event.  `Break` means the player asked to quit.
pub fn handle_event(
    state: &RoundState,
    event: GameEvent,
    rng: &mut impl Rng,
) -> ControlFlow<(), RoundState> {
    let next = match (event, state.status) {
        (GameEvent::Quit, _) => return ControlFlow::Break(()),
        (GameEvent::FlapOrRestart, RoundStatus::Active) => RoundState {
            avatar: flap(&state.avatar),
            ..state.clone()
        },
        (GameEvent::FlapOrRestart, RoundStatus::GameOver) => restart(state),
        (GameEvent::SpawnTimerFired, RoundStatus::Active) => RoundState {
            obstacles: spawn(&state.obstacles, SCREEN_WIDTH, rng),
            ..state.clone()
        },
        // The timer keeps firing during game over; those spawns are dropped.
        (GameEvent::SpawnTimerFired, RoundStatus::GameOver) => state.clone(),
    };
    ControlFlow::Continue(next)
}

/// Advance the simulation by one tick.  A game-over round is returned as is.
pub fn tick(state: &RoundState) -> RoundState {
    if state.status == RoundStatus::GameOver {
        return state.clone();
    }

    // ── 1. Gravity ───────────────────────────────────────────────────────────
    let avatar = integrate(&state.avatar);

    // ── 2. Move and retire obstacles ─────────────────────────────────────────
    let obstacles = retire(&advance(&state.obstacles));

    // ── 3. Collision and bounds ──────────────────────────────────────────────
    let crashed = is_fatal(&avatar, &obstacles);

    // ── 4. Scoring against the same post-advance positions ──────────────────
    let mut score = state.score;
    let obstacles: Vec<Obstacle> = obstacles
        .into_iter()
        .map(|o| {
            if !o.scored && o.x + OBSTACLE_WIDTH < avatar.x {
                score += 1;
                Obstacle { scored: true, ..o }
            } else {
                o
            }
        })
        .collect();

    // ── 5. Status & high score ───────────────────────────────────────────────
    let (status, high_score) = if crashed {
        log::info!("game over: score {score}, high score {}", state.high_score.max(score));
        (RoundStatus::GameOver, state.high_score.max(score))
    } else {
        (RoundStatus::Active, state.high_score)
    };

    RoundState {
        avatar,
        obstacles,
        score,
        high_score,
        status,
        frame: state.frame + 1,
    }
}

/// Render-ready view of the round.
pub fn draw_payload(state: &RoundState) -> DrawPayload {
    match state.status {
        RoundStatus::Active => DrawPayload::Active {
            avatar: avatar_rect(&state.avatar),
            velocity: state.avatar.velocity,
            frame: state.frame,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    upper: upper_region(o),
                    lower: lower_region(o),
                })
                .collect(),
            score: state.score,
        },
        RoundStatus::GameOver => DrawPayload::GameOver {
            score: state.score,
            high_score: state.high_score,
        },
    }
}

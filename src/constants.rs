/// Fixed world geometry and physics.  Units are world pixels and ticks
/// (one tick = 1/60 s).

// ── Screen ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 400.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// ── Avatar ────────────────────────────────────────────────────────────────────

pub const AVATAR_X: f32 = 100.0;
pub const AVATAR_SIZE: f32 = 30.0;
pub const AVATAR_START_Y: f32 = SCREEN_HEIGHT / 2.0;

/// Downward acceleration added to velocity every tick.
pub const GRAVITY: f32 = 0.5;
/// Velocity set (not added) by a flap.
pub const FLAP_IMPULSE: f32 = -10.0;

// ── Obstacles ─────────────────────────────────────────────────────────────────

pub const OBSTACLE_WIDTH: f32 = 60.0;
pub const GAP_HEIGHT: f32 = 175.0;
pub const OBSTACLE_SPEED: f32 = 4.0;

/// Inclusive bounds for a freshly spawned obstacle's gap-top.
pub const MIN_GAP_TOP: i32 = 100;
pub const MAX_GAP_TOP: i32 = 400;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const SPAWN_PERIOD_MS: u64 = 1500;
pub const TICK_RATE_HZ: u32 = 60;

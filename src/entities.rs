/// All round entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoundStatus {
    Active,
    GameOver,
}

/// Discrete inputs delivered to the round, one at a time, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    /// Flap while active, restart while game over.
    FlapOrRestart,
    SpawnTimerFired,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in world pixels; `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

// ── Avatar & obstacles ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Avatar {
    /// Horizontal position of the left edge.  Never changes.
    pub x: f32,
    /// Vertical position of the top edge.  Not clamped.
    pub y: f32,
    /// Side length of the square bounding box.
    pub size: f32,
    /// Vertical velocity in pixels per tick (positive = downward).
    pub velocity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Left edge, moving leftward every active tick.
    pub x: f32,
    /// Bottom of the upper blocking region.  Chosen at spawn, never rewritten.
    pub gap_top: f32,
    /// Set once the obstacle has fully passed the avatar.
    pub scored: bool,
}

// ── Master round state ────────────────────────────────────────────────────────

/// Everything the round controller owns.  Cloneable so the pure update
/// functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub avatar: Avatar,
    /// Live obstacles in spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best final score seen by this process.  Only raised on game over.
    pub high_score: u32,
    pub status: RoundStatus,
    /// Active ticks since the round began; drives sprite animation only.
    pub frame: u64,
}

// ── Render output ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleView {
    pub upper: Rect,
    pub lower: Rect,
}

/// What the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPayload {
    Active {
        avatar: Rect,
        velocity: f32,
        frame: u64,
        obstacles: Vec<ObstacleView>,
        score: u32,
    },
    GameOver {
        score: u32,
        high_score: u32,
    },
}

/// Frame pacing and the obstacle spawn timer.

use std::time::Duration;

use crate::constants::{SPAWN_PERIOD_MS, TICK_RATE_HZ};

/// Target wall-clock length of one frame (60 Hz).
pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE_HZ as u64);

/// Repeating fixed-period timer.  It never pauses; callers decide whether a
/// firing matters.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    period: Duration,
    elapsed: Duration,
}

impl SpawnTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Feed in elapsed time; returns how many periods completed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SPAWN_PERIOD_MS))
    }
}

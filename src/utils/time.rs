use std::time::{Duration, Instant};

/// Timer for tracking frame timing and elapsed time.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Rewinds the timer to now, discarding accumulated state. The first
    /// tick after a reset measures from the reset, not from construction.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Updates the timer (called once per frame).
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Delta in seconds, clamped to `max`. Keeps the first frame after a
    /// stall (or after `reset`) from producing a giant playback jump.
    #[must_use]
    pub fn dt_seconds_clamped(&self, max: f32) -> f32 {
        self.dt_seconds().min(max)
    }
}

//! Frame timing utilities.
//!
//! `Time` is produced once per rendered frame by the runner's [`TimeClock`].
//! Gameplay itself advances in fixed steps: the runner feeds every frame delta
//! into a [`FixedStep`] accumulator and runs as many updates as it reports.
//!
//! # Example
//! ```rust,ignore
//! let mut clock = TimeClock::new();
//! let mut step = FixedStep::new(1000, 100);
//! loop {
//!     let time = clock.tick();
//!     for _ in 0..step.advance(time.delta) {
//!         game.update(&input, step.dt());
//!     }
//! }
//! ```

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame.  Clamped to a maximum of 0.1
    /// so a stalled frame does not trigger a burst of catch-up updates.
    pub delta: f32,

    /// Total seconds elapsed since the application started.
    pub elapsed: f64,

    /// Number of frames rendered so far (starts at 0 for the first frame).
    pub frame_count: u64,
}

// ─── Clock (lives in the runner) ───────────────────────────────────────────

/// Stateful timer that produces [`Time`] snapshots.
pub struct TimeClock {
    start:       std::time::Instant,
    last_tick:   std::time::Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            start:       now,
            last_tick:   now,
            frame_count: 0,
        }
    }

    /// Return the current [`Time`] snapshot without advancing the clock.
    pub fn peek(&self) -> Time {
        let now = std::time::Instant::now();
        Self::snapshot(self.start, self.last_tick, now, self.frame_count)
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now  = std::time::Instant::now();
        let time = Self::snapshot(self.start, self.last_tick, now, self.frame_count);

        self.last_tick   = now;
        self.frame_count += 1;

        time
    }

    fn snapshot(
        start: std::time::Instant,
        last: std::time::Instant,
        now: std::time::Instant,
        frame_count: u64,
    ) -> Time {
        let raw_dt  = (now - last).as_secs_f32();
        let delta   = raw_dt.min(0.1);
        let elapsed = (now - start).as_secs_f64();
        Time { delta, elapsed, frame_count }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Fixed-step accumulator ────────────────────────────────────────────────

/// Converts variable frame deltas into a whole number of fixed-length steps.
///
/// Leftover time stays in the accumulator for the next frame.  When more than
/// `max_steps` are owed in one frame the surplus backlog is dropped instead of
/// being carried forward forever.
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt:          f32,
    accumulator: f32,
    max_steps:   u32,
}

impl FixedStep {
    /// `rate_hz` is clamped to at least 1, `max_steps` to at least 1.
    pub fn new(rate_hz: u32, max_steps: u32) -> Self {
        Self {
            dt:          1.0 / rate_hz.max(1) as f32,
            accumulator: 0.0,
            max_steps:   max_steps.max(1),
        }
    }

    /// Length of one step in seconds.
    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Time banked but not yet consumed by a step.
    #[inline]
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Add `delta` seconds and return how many steps should run now.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_steps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.dt {
            log::debug!(
                "fixed step backlog of {:.4}s dropped",
                self.accumulator
            );
            self.accumulator %= self.dt;
        }
        steps
    }
}

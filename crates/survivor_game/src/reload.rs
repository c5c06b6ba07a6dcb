/// Elapsed-time counter for the reload animation.
///
/// Time only advances through [`ReloadTimer::tick`], so a reload lasts a
/// fixed number of updates regardless of frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReloadTimer {
    elapsed: f32,
    duration: f32,
}

impl ReloadTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Reset the elapsed time to zero.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

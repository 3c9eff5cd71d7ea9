/// Frame-driven stopwatch for a session.
///
/// The host reports each frame's delta through [`SessionClock::advance`];
/// time only accumulates while the clock is running. Whether the clock runs
/// at all is decided by the session from its time limit.
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    elapsed: f64,
    running: bool,
}

impl SessionClock {
    /// Create a stopped clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and start running.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Resume accumulating without resetting.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accumulating, keeping the elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the elapsed time.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    /// Add a frame delta. Ignored while stopped; negative or NaN deltas are dropped.
    pub fn advance(&mut self, dt: f32) {
        if !self.running || dt.is_nan() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt as f64;
    }

    /// Whether frames currently add time.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulated running time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}

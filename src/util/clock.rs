use web_time::Instant;

/// Wall-clock accumulator for the render loop.
///
/// Tracks the last tick timestamp and the total elapsed milliseconds since
/// construction. The accumulated value is monotonically non-decreasing for
/// the life of the session and is only reset by constructing a new clock.
pub struct SceneClock {
    /// Timestamp of the previous tick.
    last_tick: Instant,
    /// Accumulated wall-clock milliseconds.
    elapsed_ms: f64,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneClock {
    /// Create a clock with zero accumulated time, starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by the wall-clock delta since the previous tick and return
    /// that delta in milliseconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta_ms = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;
        self.advance(delta_ms);
        delta_ms
    }

    /// Advance the accumulator by an explicit delta in milliseconds.
    ///
    /// Non-positive deltas are ignored, keeping the elapsed value
    /// monotonically non-decreasing.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
    }

    /// Total accumulated milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Total accumulated time in seconds (milliseconds × 0.001).
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms * 0.001
    }
}

#[cfg(test)]
mod tests {
    use super::SceneClock;

    #[test]
    fn accumulates_deltas() {
        let mut clock = SceneClock::new();
        clock.advance(16.0);
        clock.advance(17.0);
        clock.advance(967.0);
        assert_eq!(clock.elapsed_ms(), 1000.0);
        assert_eq!(clock.elapsed_seconds(), 1.0);
    }

    #[test]
    fn single_large_tick() {
        let mut clock = SceneClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.elapsed_ms(), 1000.0);
        assert_eq!(clock.elapsed_seconds(), 1.0);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut clock = SceneClock::new();
        let mut previous = 0.0;
        for delta in [5.0, 0.0, 32.0, -10.0, 7.5] {
            clock.advance(delta);
            assert!(clock.elapsed_seconds() >= previous);
            previous = clock.elapsed_seconds();
        }
        assert_eq!(clock.elapsed_ms(), 44.5);
    }

    #[test]
    fn tick_advances_from_wall_clock() {
        let mut clock = SceneClock::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let delta = clock.tick();
        assert!(delta > 0.0);
        assert_eq!(clock.elapsed_ms(), delta);
    }
}

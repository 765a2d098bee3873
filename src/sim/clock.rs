use std::time::Instant;

/// Monotonic time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_millis(&self) -> f64;
}

/// Wall-clock time from [`Instant`], measured from construction.
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    #[inline]
    fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Seconds between two millisecond stamps.
#[inline]
pub fn delta_seconds(previous: f64, now: f64) -> f64 {
    (now - previous) / 1000.0
}

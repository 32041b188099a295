//! Time sources for the preview engine
//!
//! The engine never reads wall time directly; everything goes through a
//! `TimeSource` so tests can drive timing deterministically.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait TimeSource: Send {
    /// Elapsed time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Real monotonic time, measured from construction
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A hand-driven clock for deterministic tests.
///
/// Cloned handles share the same position, so a test can hold one handle
/// while the engine owns another.
#[derive(Clone, Default)]
pub struct ManualClock {
    position: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        *self.position.lock().unwrap() += by;
    }

    /// Jump to an absolute position
    pub fn set(&self, to: Duration) {
        *self.position.lock().unwrap() = to;
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Duration {
        *self.position.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shares_position_across_handles() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        clock.advance(Duration::from_millis(50));
        assert_eq!(handle.now(), Duration::from_millis(50));

        handle.set(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}

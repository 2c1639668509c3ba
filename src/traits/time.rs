use std::cell::Cell;
use std::time::{Duration, Instant};

/// Abstraction over the time source and cooperative waits.
/// Implementations: SystemClock (production), MockClock (testing).
///
/// Every wait in the engine goes through `sleep`, and every deadline check
/// goes through `now`, so the whole game runs in virtual time under test.
pub trait Clock {
    /// Monotonic time elapsed since the clock was created.
    fn now(&self) -> Duration;

    /// Block the single logical thread of control for `duration`.
    fn sleep(&self, duration: Duration);
}

/// System clock using std::time::Instant and std::thread::sleep.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Mock clock for deterministic testing. `sleep` advances virtual time
/// instead of blocking, so timing-dependent paths run instantly.
pub struct MockClock {
    current: Cell<Duration>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
        }
    }

    pub fn set(&self, at: Duration) {
        self.current.set(at);
    }

    pub fn advance(&self, delta: Duration) {
        self.current.set(self.current.get() + delta);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        self.current.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_sleep_advances() {
        let clock = MockClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.sleep(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(250));
        clock.sleep(Duration::from_millis(750));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn mock_clock_set() {
        let clock = MockClock::new();
        clock.set(Duration::from_secs(5));
        assert_eq!(clock.now(), Duration::from_secs(5));
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(6));
    }

    #[test]
    fn system_clock_monotonic() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1);
    }
}

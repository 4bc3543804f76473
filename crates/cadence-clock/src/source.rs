use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A source of monotonic timestamps for a [`TickClock`](crate::TickClock).
///
/// Production code uses [`MonotonicClock`]; tests and simulations inject a
/// [`ManualClock`] so that timing is controlled rather than sampled.
///
/// Implementations must return non-decreasing instants for the clock's
/// accounting to advance; the clock clamps (rather than panics) if a source
/// ever steps backward.
pub trait ClockSource {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The host's monotonic clock (`Instant::now`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl ClockSource for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A hand-advanced clock source.
///
/// Cloning yields another handle to the same underlying instant, so a test
/// can keep one handle and hand the other to the clock under test:
///
/// ```
/// use cadence_clock::{DeltaMode, ManualClock, TickClock};
/// use std::time::Duration;
///
/// let time = ManualClock::new();
/// let mut clock = TickClock::with_source(10.0, DeltaMode::Measured, time.clone()).unwrap();
/// assert!(!clock.poll());
/// time.advance(Duration::from_millis(150));
/// assert!(clock.poll());
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a manual clock anchored at the current real instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves this clock (and every clone of it) forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Pins this clock to an arbitrary instant.
    ///
    /// May move time backward; intended for exercising non-monotonic-source
    /// handling in tests.
    pub fn set(&self, to: Instant) {
        self.now.set(to);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_clock_is_non_decreasing() {
        let source = MonotonicClock;
        let a = source.now();
        let b = source.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new();
        let b = a.clone();
        let before = b.now();
        a.advance(Duration::from_secs(5));
        assert_eq!(b.now(), before + Duration::from_secs(5));
    }
}

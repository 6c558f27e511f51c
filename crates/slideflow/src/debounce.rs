//! Deterministic trailing-edge debounce.
//!
//! Resize events arrive in bursts; relayout should run once, after the
//! burst settles. The [`Debouncer`] holds a deadline instead of a thread
//! or timer: each trigger pushes the deadline out by the full delay, and
//! the owner polls [`Debouncer::fire_ready`] with the current time.
//! Feeding explicit [`Instant`]s keeps the whole mechanism testable
//! without sleeping.

use std::time::{Duration, Instant};

/// A trailing-edge debounce timer driven by caller-supplied instants.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event at `now`, resetting the deadline to `now + delay`.
    ///
    /// Triggering while a deadline is pending replaces it; only the last
    /// event of a burst determines when the debouncer fires.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns `true` exactly once per settled burst: when a deadline is
    /// pending and `now` has reached it. Firing clears the deadline.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    #[test]
    fn test_fires_once_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.trigger(start);
        assert!(!debouncer.fire_ready(start));
        assert!(!debouncer.fire_ready(start + Duration::from_millis(199)));
        assert!(debouncer.fire_ready(start + DELAY));

        // Already fired; nothing pending
        assert!(!debouncer.fire_ready(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_burst_collapses_to_single_fire() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        for ms in [0u64, 50, 100, 150] {
            debouncer.trigger(start + Duration::from_millis(ms));
        }

        // The deadline tracks the last trigger, not the first
        assert!(!debouncer.fire_ready(start + Duration::from_millis(200)));
        assert!(debouncer.fire_ready(start + Duration::from_millis(350)));
        assert!(!debouncer.fire_ready(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_cancel_drops_pending_deadline() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.trigger(start);
        assert!(debouncer.is_pending());

        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_ready(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_retrigger_after_fire_starts_fresh() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.trigger(start);
        assert!(debouncer.fire_ready(start + DELAY));

        debouncer.trigger(start + Duration::from_secs(1));
        assert!(debouncer.fire_ready(start + Duration::from_secs(1) + DELAY));
    }
}

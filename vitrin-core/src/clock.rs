//! Wall-clock sources for the offer countdown.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

use crate::time::Timestamp;

/// Trait for abstracting the current time.
/// Platform-specific implementations should provide this
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Host wall clock backed by `chrono::Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(Utc::now())
    }
}

/// Hand-driven clock shared between a driver and the code under test.
///
/// Clones observe the same instant.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance_ms(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add_ms(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(Timestamp::from_millis(1_000));
        let observer = clock.clone();
        clock.advance_ms(2_500);
        assert_eq!(observer.now(), Timestamp::from_millis(3_500));
        observer.set(Timestamp::from_millis(10));
        assert_eq!(clock.now().as_millis(), 10);
    }

    #[test]
    fn system_clock_is_after_2020() {
        let now = SystemClock.now();
        assert!(now > Timestamp::parse_rfc3339("2020-01-01T00:00:00Z").unwrap());
    }
}

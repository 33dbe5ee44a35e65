//! Hero slider position.

use serde::{Deserialize, Serialize};

/// Active slide index over a fixed number of slides; every move wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlideCursor {
    len: usize,
    active: usize,
}

impl SlideCursor {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            active: (self.active + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jump to `index`, wrapping out-of-range values.
    #[must_use]
    pub const fn go_to(self, index: usize) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            active: index % self.len,
            ..self
        }
    }

    /// Apply a signed step (dragging, keyboard) with wrapping.
    #[must_use]
    pub fn step(self, delta: isize) -> Self {
        if self.len == 0 {
            return self;
        }
        let len = isize::try_from(self.len).unwrap_or(isize::MAX);
        let current = isize::try_from(self.active).unwrap_or(0);
        let target = (current + delta % len).rem_euclid(len);
        self.go_to(usize::try_from(target).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let cursor = SlideCursor::new(4);
        assert_eq!(cursor.prev().active(), 3);
        assert_eq!(cursor.next().next().next().next().active(), 0);
        assert_eq!(cursor.go_to(6).active(), 2);
        assert!(cursor.go_to(6).is_active(2));
    }

    #[test]
    fn empty_slider_stays_put() {
        let cursor = SlideCursor::new(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.next().active(), 0);
        assert_eq!(cursor.prev().active(), 0);
        assert_eq!(cursor.step(-5).active(), 0);
        assert!(!cursor.is_active(0));
    }

    #[test]
    fn signed_steps_wrap() {
        let cursor = SlideCursor::new(4).go_to(1);
        assert_eq!(cursor.step(-2).active(), 3);
        assert_eq!(cursor.step(7).active(), 0);
        assert_eq!(cursor.step(isize::MIN).active(), 1);
    }
}

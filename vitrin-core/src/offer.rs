//! Countdown and progress calculation for limited-time offers.
//!
//! [`compute_offer_state`] is a pure function of `(now, end, start)`: the
//! display resamples the clock once per second and feeds the sample in,
//! so there is nothing to simulate when testing it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    MIN_WINDOW_MS, MS_PER_SECOND, PROGRESS_MAX, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::time::Timestamp;

/// The `[start, end]` interval during which a promotional price is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<Timestamp>,
    pub end: Timestamp,
}

impl TimeWindow {
    /// Build a window, reporting (but accepting) a start that is not before the end.
    #[must_use]
    pub fn new(start: Option<Timestamp>, end: Timestamp) -> Self {
        let window = Self { start, end };
        if window.is_degenerate() {
            log::warn!(
                "offer window starts at {} but ends at {}; progress reads 0% until the start and 100% after it",
                start.unwrap_or_default(),
                end
            );
        }
        window
    }

    /// Window with no start: countdown only, no progress bar.
    #[must_use]
    pub const fn ending_at(end: Timestamp) -> Self {
        Self { start: None, end }
    }

    /// True when a start is present and is not strictly before the end.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start.is_some_and(|start| start >= self.end)
    }

    /// Window length used for progress, floored at one millisecond.
    #[must_use]
    pub fn total_ms(&self) -> Option<i64> {
        self.start
            .map(|start| start.millis_until(self.end).max(MIN_WINDOW_MS))
    }

    #[must_use]
    pub fn state_at(&self, now: Timestamp) -> OfferState {
        compute_offer_state(now, self.end, self.start)
    }
}

/// Remaining duration split into whole units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingTime {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a non-negative millisecond count, truncating sub-second remainders.
    #[must_use]
    pub const fn from_millis(remaining_ms: u64) -> Self {
        let total_seconds = remaining_ms / MS_PER_SECOND.unsigned_abs();
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: ((total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total_seconds % SECONDS_PER_MINUTE) as u8,
        }
    }

    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours as u64 * SECONDS_PER_HOUR
            + self.minutes as u64 * SECONDS_PER_MINUTE
            + self.seconds as u64
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Zero-padded labels; only `days` may grow past two digits.
    #[must_use]
    pub fn padded(&self) -> PaddedTime {
        PaddedTime {
            days: pad2(self.days),
            hours: pad2(u64::from(self.hours)),
            minutes: pad2(u64::from(self.minutes)),
            seconds: pad2(u64::from(self.seconds)),
        }
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Display strings for the four countdown pills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddedTime {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Everything the offer display needs for one sample of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferState {
    pub remaining: RemainingTime,
    pub is_expired: bool,
    /// Present only when the window has a start; the caller must not draw a bar otherwise.
    pub progress_percent: Option<u8>,
}

impl OfferState {
    /// Whether the purchase action should be enabled.
    #[must_use]
    pub const fn cta_enabled(&self) -> bool {
        !self.is_expired
    }
}

/// Compute the offer display state for a single clock sample.
///
/// Total over all inputs: past-due ends read as expired, `start >= end`
/// collapses to a one millisecond window, and extreme values saturate.
#[must_use]
pub fn compute_offer_state(
    now: Timestamp,
    end: Timestamp,
    start: Option<Timestamp>,
) -> OfferState {
    let remaining_ms = now.millis_until(end).max(0).unsigned_abs();
    let is_expired = remaining_ms == 0;
    let remaining = if is_expired {
        RemainingTime::ZERO
    } else {
        RemainingTime::from_millis(remaining_ms)
    };

    let progress_percent = start.map(|start| {
        let total_ms = start.millis_until(end).max(MIN_WINDOW_MS);
        let elapsed_ms = start.millis_until(now).clamp(0, total_ms);
        progress_from(elapsed_ms, total_ms)
    });

    OfferState {
        remaining,
        is_expired,
        progress_percent,
    }
}

/// `round(100 * elapsed / total)` in integer arithmetic, rounding halves up.
fn progress_from(elapsed_ms: i64, total_ms: i64) -> u8 {
    let elapsed = i128::from(elapsed_ms);
    let total = i128::from(total_ms.max(MIN_WINDOW_MS));
    let scaled = (200 * elapsed + total) / (2 * total);
    let clamped = scaled.clamp(0, i128::from(PROGRESS_MAX));
    u8::try_from(clamped).unwrap_or(PROGRESS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Timestamp = Timestamp::from_millis(1_750_000_000_000);

    #[test]
    fn one_of_each_unit() {
        let state = compute_offer_state(NOW, NOW.saturating_add_ms(90_061_000), None);
        let padded = state.remaining.padded();
        assert_eq!(padded.days, "01");
        assert_eq!(padded.hours, "01");
        assert_eq!(padded.minutes, "01");
        assert_eq!(padded.seconds, "01");
        assert!(!state.is_expired);
        assert!(state.cta_enabled());
        assert_eq!(state.progress_percent, None);
    }

    #[test]
    fn past_end_is_expired_and_zeroed() {
        let state = compute_offer_state(NOW, NOW.saturating_sub_ms(5_000), None);
        assert!(state.is_expired);
        assert!(!state.cta_enabled());
        assert_eq!(state.remaining, RemainingTime::ZERO);
        assert_eq!(state.remaining.to_string(), "00:00:00:00");
    }

    #[test]
    fn exactly_at_end_is_expired() {
        let state = compute_offer_state(NOW, NOW, None);
        assert!(state.is_expired);
    }

    #[test]
    fn sub_second_remainder_truncates_but_is_not_expired() {
        let state = compute_offer_state(NOW, NOW.saturating_add_ms(999), None);
        assert!(!state.is_expired);
        assert!(state.remaining.is_zero());
    }

    #[test]
    fn halfway_through_window_reads_fifty() {
        let state = compute_offer_state(
            NOW,
            NOW.saturating_add_ms(1_800_000),
            Some(NOW.saturating_sub_ms(1_800_000)),
        );
        assert_eq!(state.progress_percent, Some(50));
        assert_eq!(state.remaining.minutes, 30);
    }

    #[test]
    fn progress_endpoints_and_clamps() {
        let start = NOW;
        let end = NOW.saturating_add_ms(10_000);
        assert_eq!(
            compute_offer_state(start, end, Some(start)).progress_percent,
            Some(0)
        );
        assert_eq!(
            compute_offer_state(end, end, Some(start)).progress_percent,
            Some(100)
        );
        assert_eq!(
            compute_offer_state(start.saturating_sub_ms(50_000), end, Some(start))
                .progress_percent,
            Some(0)
        );
        assert_eq!(
            compute_offer_state(end.saturating_add_ms(50_000), end, Some(start))
                .progress_percent,
            Some(100)
        );
    }

    #[test]
    fn progress_rounds_half_up() {
        let start = Timestamp::from_millis(0);
        let end = Timestamp::from_millis(200);
        // 1/200 = 0.5% rounds to 1, 0.4% rounds to 0
        assert_eq!(
            compute_offer_state(Timestamp::from_millis(1), end, Some(start)).progress_percent,
            Some(1)
        );
        let end = Timestamp::from_millis(1_000);
        assert_eq!(
            compute_offer_state(Timestamp::from_millis(4), end, Some(start)).progress_percent,
            Some(0)
        );
        assert_eq!(
            compute_offer_state(Timestamp::from_millis(5), end, Some(start)).progress_percent,
            Some(1)
        );
    }

    #[test]
    fn degenerate_window_clamps_to_one_millisecond() {
        let window = TimeWindow::new(Some(NOW), NOW.saturating_sub_ms(60_000));
        assert!(window.is_degenerate());
        assert_eq!(window.total_ms(), Some(1));
        let state = window.state_at(NOW.saturating_add_ms(1));
        assert_eq!(state.progress_percent, Some(100));
        assert!(state.is_expired);
        let between = window.state_at(NOW.saturating_sub_ms(30_000));
        assert_eq!(between.progress_percent, Some(0));
        assert!(between.is_expired);
        let before_end = window.state_at(NOW.saturating_sub_ms(90_000));
        assert_eq!(before_end.progress_percent, Some(0));
        assert!(!before_end.is_expired);

        let equal = TimeWindow::new(Some(NOW), NOW);
        assert!(equal.is_degenerate());
        assert_eq!(equal.state_at(NOW).progress_percent, Some(0));
    }

    #[test]
    fn window_without_start_is_never_degenerate() {
        let window = TimeWindow::ending_at(NOW);
        assert!(!window.is_degenerate());
        assert_eq!(window.total_ms(), None);
    }

    #[test]
    fn days_grow_past_two_digits() {
        let remaining = RemainingTime::from_millis(123 * 86_400_000 + 5_000);
        assert_eq!(remaining.padded().days, "123");
        assert_eq!(remaining.padded().seconds, "05");
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        let lo = Timestamp::from_millis(i64::MIN);
        let hi = Timestamp::from_millis(i64::MAX);
        let state = compute_offer_state(lo, hi, Some(lo));
        assert!(!state.is_expired);
        assert_eq!(state.progress_percent, Some(0));
        let state = compute_offer_state(hi, lo, Some(hi));
        assert!(state.is_expired);
        assert_eq!(state.progress_percent, Some(0));
    }
}

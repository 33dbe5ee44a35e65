//! Property checks run by the tester, one sample per iteration.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use vitrin_core::{
    Catalog, ManualClock, ManualScheduler, OfferState, RemainingTime, TimeWindow, Timestamp,
    compute_offer_state, drive_offer, savings,
};

const BASE_MS: i64 = 1_750_000_000_000;
const TEN_YEARS_MS: i64 = 10 * 365 * 86_400_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CheckFailure(pub String);

fn ensure(condition: bool, detail: impl FnOnce() -> String) -> Result<(), CheckFailure> {
    if condition {
        Ok(())
    } else {
        Err(CheckFailure(detail()))
    }
}

/// Inputs shared by every iteration of a run.
pub struct CheckContext {
    /// Catalog under test, or the reason it failed to load.
    pub catalog: Result<Catalog, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Expired,
    Decomposition,
    Monotonic,
    ProgressBounds,
    Concrete,
    DegenerateWindow,
    Teardown,
    Catalog,
}

impl Scenario {
    pub const ALL: [Self; 8] = [
        Self::Expired,
        Self::Decomposition,
        Self::Monotonic,
        Self::ProgressBounds,
        Self::Concrete,
        Self::DegenerateWindow,
        Self::Teardown,
        Self::Catalog,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Decomposition => "decomposition",
            Self::Monotonic => "monotonic",
            Self::ProgressBounds => "progress-bounds",
            Self::Concrete => "concrete",
            Self::DegenerateWindow => "degenerate-window",
            Self::Teardown => "teardown",
            Self::Catalog => "catalog",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Expired => "expired exactly when end <= now, with zeroed remaining time",
            Self::Decomposition => "days/hours/minutes/seconds reassemble the whole seconds left",
            Self::Monotonic => "remaining time never grows as the clock advances",
            Self::ProgressBounds => "progress stays in 0..=100 and only exists with a start",
            Self::Concrete => "fixed examples for countdown text and progress",
            Self::DegenerateWindow => "start >= end collapses to a one millisecond window",
            Self::Teardown => "dropping the offer timer stops every further update",
            Self::Catalog => "catalog loads, validates and yields a live offer",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.key() == key)
    }

    /// Run one sample.
    ///
    /// # Errors
    ///
    /// Returns the first property that did not hold.
    pub fn check(self, rng: &mut ChaCha8Rng, ctx: &CheckContext) -> Result<(), CheckFailure> {
        match self {
            Self::Expired => check_expired(rng),
            Self::Decomposition => check_decomposition(rng),
            Self::Monotonic => check_monotonic(rng),
            Self::ProgressBounds => check_progress_bounds(rng),
            Self::Concrete => check_concrete(),
            Self::DegenerateWindow => check_degenerate(rng),
            Self::Teardown => check_teardown(rng),
            Self::Catalog => check_catalog(rng, ctx),
        }
    }
}

fn instant(rng: &mut ChaCha8Rng) -> Timestamp {
    Timestamp::from_millis(BASE_MS + rng.gen_range(-TEN_YEARS_MS..=TEN_YEARS_MS))
}

fn check_expired(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let now = instant(rng);
    // Bias towards the boundary a quarter of the time.
    let end = if rng.gen_bool(0.25) {
        now.saturating_add_ms(rng.gen_range(-1_000..=1_000))
    } else {
        instant(rng)
    };
    let state = compute_offer_state(now, end, None);
    ensure(state.is_expired == (end <= now), || {
        format!("now={now} end={end}: is_expired={}", state.is_expired)
    })?;
    if state.is_expired {
        ensure(state.remaining == RemainingTime::ZERO, || {
            format!("expired at now={now} but remaining={:?}", state.remaining)
        })?;
        ensure(!state.cta_enabled(), || "expired offer kept its CTA".to_string())?;
    }
    Ok(())
}

fn check_decomposition(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let now = instant(rng);
    let left_ms = rng.gen_range(0..TEN_YEARS_MS);
    let remaining = compute_offer_state(now, now.saturating_add_ms(left_ms), None).remaining;
    let expected = left_ms.unsigned_abs() / 1_000;
    ensure(remaining.total_seconds() == expected, || {
        format!("{left_ms}ms left decomposed to {remaining:?}")
    })?;
    ensure(
        remaining.hours < 24 && remaining.minutes < 60 && remaining.seconds < 60,
        || format!("component out of range: {remaining:?}"),
    )?;
    let padded = remaining.padded();
    ensure(
        padded.hours.len() == 2
            && padded.minutes.len() == 2
            && padded.seconds.len() == 2
            && padded.days.len() >= 2,
        || format!("padding broken: {padded:?}"),
    )
}

fn check_monotonic(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let end = instant(rng);
    let earlier = end.saturating_sub_ms(rng.gen_range(-60_000..86_400_000));
    let later = earlier.saturating_add_ms(rng.gen_range(0..3_600_000));
    let before = compute_offer_state(earlier, end, None);
    let after = compute_offer_state(later, end, None);
    ensure(
        after.remaining.total_seconds() <= before.remaining.total_seconds(),
        || format!("remaining grew from {earlier} to {later} (end {end})"),
    )?;
    ensure(!before.is_expired || after.is_expired, || {
        format!("offer un-expired between {earlier} and {later}")
    })
}

fn check_progress_bounds(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let now = instant(rng);
    let end = instant(rng);
    let start = instant(rng);
    let Some(percent) = compute_offer_state(now, end, Some(start)).progress_percent else {
        return Err(CheckFailure("progress missing despite a start".to_string()));
    };
    ensure(percent <= 100, || format!("progress {percent} above 100"))?;
    if now <= start {
        ensure(percent == 0, || format!("progress {percent} before start"))?;
    }
    if start < end && now >= end {
        ensure(percent == 100, || format!("progress {percent} after end"))?;
    }
    ensure(
        compute_offer_state(now, end, None).progress_percent.is_none(),
        || "progress present without a start".to_string(),
    )
}

struct Example {
    left_ms: i64,
    start_offset_ms: Option<i64>,
    text: &'static str,
    expired: bool,
    progress: Option<u8>,
}

const EXAMPLES: [Example; 6] = [
    Example { left_ms: 90_061_000, start_offset_ms: None, text: "01:01:01:01", expired: false, progress: None },
    Example { left_ms: 0, start_offset_ms: None, text: "00:00:00:00", expired: true, progress: None },
    Example { left_ms: 999, start_offset_ms: None, text: "00:00:00:00", expired: false, progress: None },
    Example { left_ms: -5_000, start_offset_ms: None, text: "00:00:00:00", expired: true, progress: None },
    Example { left_ms: 8_640_000_000, start_offset_ms: None, text: "100:00:00:00", expired: false, progress: None },
    Example { left_ms: 2_000, start_offset_ms: Some(-2_000), text: "00:00:00:02", expired: false, progress: Some(50) },
];

fn countdown_text(state: &OfferState) -> String {
    let padded = state.remaining.padded();
    format!(
        "{}:{}:{}:{}",
        padded.days, padded.hours, padded.minutes, padded.seconds
    )
}

fn check_concrete() -> Result<(), CheckFailure> {
    let now = Timestamp::from_millis(BASE_MS);
    for example in &EXAMPLES {
        let start = example.start_offset_ms.map(|offset| now.saturating_add_ms(offset));
        let state = compute_offer_state(now, now.saturating_add_ms(example.left_ms), start);
        let text = countdown_text(&state);
        ensure(
            text == example.text
                && state.is_expired == example.expired
                && state.progress_percent == example.progress,
            || {
                format!(
                    "{}ms left: got {text} expired={} progress={:?}",
                    example.left_ms, state.is_expired, state.progress_percent
                )
            },
        )?;
    }
    Ok(())
}

fn check_degenerate(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let end = instant(rng);
    let start = end.saturating_add_ms(rng.gen_range(0..86_400_000));
    let now = start.saturating_add_ms(rng.gen_range(-10_000..10_000));
    let window = TimeWindow::new(Some(start), end);
    ensure(window.is_degenerate(), || {
        format!("start {start} end {end} not flagged degenerate")
    })?;
    ensure(window.total_ms() == Some(1), || {
        format!("window length {:?}, expected 1ms floor", window.total_ms())
    })?;
    let expected = if now > start { 100 } else { 0 };
    let percent = window.state_at(now).progress_percent;
    ensure(percent == Some(expected), || {
        format!("now {now} start {start}: progress {percent:?}, expected {expected}")
    })
}

fn check_teardown(rng: &mut ChaCha8Rng) -> Result<(), CheckFailure> {
    let loaded_at = instant(rng);
    let clock = ManualClock::new(loaded_at);
    let scheduler = ManualScheduler::new();
    let window = TimeWindow::ending_at(loaded_at.saturating_add_ms(rng.gen_range(0..172_800_000)));
    let seen = Rc::new(RefCell::new(0_usize));
    let sink = seen.clone();
    let timer = drive_offer(clock.clone(), &scheduler, window, move |_| {
        *sink.borrow_mut() += 1;
    })
    .map_err(|err| CheckFailure(err.to_string()))?;

    let mounted_for: usize = rng.gen_range(0..120);
    for _ in 0..mounted_for {
        clock.advance_ms(1_000);
        scheduler.advance(1_000);
    }
    ensure(*seen.borrow() == mounted_for + 1, || {
        format!("{} states after {mounted_for} ticks", seen.borrow())
    })?;
    drop(timer);
    ensure(scheduler.active_timers() == 0, || {
        format!("{} timers alive after unmount", scheduler.active_timers())
    })?;
    clock.advance_ms(60_000);
    scheduler.advance(60_000);
    ensure(*seen.borrow() == mounted_for + 1, || {
        "state delivered after unmount".to_string()
    })
}

fn check_catalog(rng: &mut ChaCha8Rng, ctx: &CheckContext) -> Result<(), CheckFailure> {
    let catalog = ctx.catalog.as_ref().map_err(|err| CheckFailure(err.clone()))?;
    catalog
        .validate()
        .map_err(|err| CheckFailure(err.to_string()))?;
    let Some(product) = catalog.offer_product() else {
        return Err(CheckFailure(format!(
            "offer product `{}` missing",
            catalog.offer.product_id
        )));
    };
    if let Some(saved) = savings(product.price, product.compare_at) {
        ensure(saved.kurus() > 0, || format!("non-positive savings {saved:?}"))?;
    }
    let loaded_at = instant(rng);
    let window = catalog
        .offer_window(loaded_at)
        .map_err(|err| CheckFailure(err.to_string()))?;
    if catalog.offer.ends_at.is_none() {
        ensure(!window.state_at(loaded_at).is_expired, || {
            format!("relative offer already expired when loaded at {loaded_at}")
        })?;
    }
    ensure(!window.is_degenerate(), || {
        format!("offer window {window:?} is degenerate")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn builtin_ctx() -> CheckContext {
        CheckContext {
            catalog: Catalog::builtin().map_err(|err| err.to_string()),
        }
    }

    #[test]
    fn keys_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_key(scenario.key()), Some(scenario));
        }
        assert_eq!(Scenario::from_key("smoke"), None);
    }

    #[test]
    fn every_scenario_passes_on_a_few_seeds() {
        let ctx = builtin_ctx();
        for scenario in Scenario::ALL {
            for seed in 0..25 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                assert_eq!(scenario.check(&mut rng, &ctx), Ok(()), "{}", scenario.key());
            }
        }
    }

    #[test]
    fn catalog_load_error_is_reported() {
        let ctx = CheckContext {
            catalog: Err("catalog JSON is malformed".to_string()),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = Scenario::Catalog.check(&mut rng, &ctx).unwrap_err();
        assert!(err.0.contains("malformed"));
    }
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vitrin_core::{RemainingTime, Timestamp, compute_offer_state};

const SEEDS: [u64; 4] = [0x00C0_FFEE, 0xFACE_B00C, 7, 1_750_000_000];
const SAMPLES: usize = 2_000;
const TEN_YEARS_MS: i64 = 10 * 365 * 86_400_000;
const BASE: i64 = 1_750_000_000_000;

fn instant(rng: &mut ChaCha8Rng) -> Timestamp {
    Timestamp::from_millis(BASE + rng.gen_range(-TEN_YEARS_MS..=TEN_YEARS_MS))
}

#[test]
fn expired_exactly_when_end_not_after_now() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..SAMPLES {
            let now = instant(&mut rng);
            let end = instant(&mut rng);
            let state = compute_offer_state(now, end, None);
            assert_eq!(state.is_expired, end <= now, "seed {seed}: now={now} end={end}");
            if state.is_expired {
                assert_eq!(state.remaining, RemainingTime::ZERO);
                assert_eq!(state.remaining.padded().days, "00");
            }
        }
    }
}

#[test]
fn decomposition_reassembles_whole_seconds() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..SAMPLES {
            let now = instant(&mut rng);
            let end = now.saturating_add_ms(rng.gen_range(0..TEN_YEARS_MS));
            let remaining = compute_offer_state(now, end, None).remaining;
            let expected = u64::try_from(now.millis_until(end)).unwrap() / 1_000;
            assert_eq!(remaining.total_seconds(), expected);
            assert!(remaining.hours < 24);
            assert!(remaining.minutes < 60);
            assert!(remaining.seconds < 60);
            let padded = remaining.padded();
            assert_eq!(padded.hours.len(), 2);
            assert_eq!(padded.minutes.len(), 2);
            assert_eq!(padded.seconds.len(), 2);
            assert!(padded.days.len() >= 2);
        }
    }
}

#[test]
fn remaining_never_increases_as_time_passes() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let end = instant(&mut rng);
        let mut now = end.saturating_sub_ms(rng.gen_range(0..86_400_000));
        let mut previous = compute_offer_state(now, end, None);
        for _ in 0..SAMPLES {
            now = now.saturating_add_ms(rng.gen_range(0..120_000));
            let state = compute_offer_state(now, end, None);
            assert!(state.remaining.total_seconds() <= previous.remaining.total_seconds());
            if previous.is_expired {
                assert!(state.is_expired);
                assert!(state.remaining.is_zero());
            }
            previous = state;
        }
    }
}

#[test]
fn progress_is_bounded_and_only_present_with_start() {
    for seed in SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..SAMPLES {
            let now = instant(&mut rng);
            let end = instant(&mut rng);
            let start = instant(&mut rng);
            let with_start = compute_offer_state(now, end, Some(start));
            let percent = with_start.progress_percent.expect("start given");
            assert!(percent <= 100);
            if now <= start {
                assert_eq!(percent, 0);
            }
            if start < end && now >= end {
                assert_eq!(percent, 100);
            }
            assert_eq!(compute_offer_state(now, end, None).progress_percent, None);
        }
    }
}

#[test]
fn progress_never_decreases_within_a_window() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    let start = instant(&mut rng);
    let end = start.saturating_add_ms(rng.gen_range(1..86_400_000));
    let mut now = start.saturating_sub_ms(10_000);
    let mut previous = 0;
    while now <= end.saturating_add_ms(10_000) {
        let percent = compute_offer_state(now, end, Some(start))
            .progress_percent
            .unwrap();
        assert!(percent >= previous);
        previous = percent;
        now = now.saturating_add_ms(rng.gen_range(1..600_000));
    }
    assert_eq!(
        compute_offer_state(end, end, Some(start)).progress_percent,
        Some(100)
    );
}

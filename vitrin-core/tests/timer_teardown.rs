use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use vitrin_core::{
    ManualClock, ManualHandle, ManualScheduler, OfferState, ScopedTimer, TimeWindow, Timestamp, drive_offer,
};

const LOADED_AT: Timestamp = Timestamp::from_millis(1_750_000_000_000);

fn offer_sink() -> (Rc<RefCell<Vec<OfferState>>>, impl FnMut(OfferState) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |state| sink.borrow_mut().push(state))
}

fn tick(clock: &ManualClock, scheduler: &ManualScheduler, seconds: u32) {
    for _ in 0..seconds {
        clock.advance_ms(1_000);
        scheduler.advance(1_000);
    }
}

#[test]
fn unmount_stops_updates() {
    let clock = ManualClock::new(LOADED_AT);
    let scheduler = ManualScheduler::new();
    let (seen, on_state) = offer_sink();
    let window = TimeWindow::ending_at(LOADED_AT.saturating_add_ms(36 * 3_600_000));

    let timer = drive_offer(clock.clone(), &scheduler, window, on_state).unwrap();
    tick(&clock, &scheduler, 5);
    assert_eq!(seen.borrow().len(), 6);
    assert_eq!(scheduler.active_timers(), 1);

    drop(timer);
    assert_eq!(scheduler.active_timers(), 0);
    tick(&clock, &scheduler, 60);
    assert_eq!(seen.borrow().len(), 6);
}

#[test]
fn early_return_releases_timer() {
    fn mount_and_bail(
        clock: &ManualClock,
        scheduler: &ManualScheduler,
        window: TimeWindow,
        on_state: impl FnMut(OfferState) + 'static,
    ) -> Result<(), String> {
        let _timer = drive_offer(clock.clone(), scheduler, window, on_state)
            .map_err(|err| err.to_string())?;
        if window.start.is_none() {
            return Err("no start configured".to_string());
        }
        Ok(())
    }

    let clock = ManualClock::new(LOADED_AT);
    let scheduler = ManualScheduler::new();
    let (seen, on_state) = offer_sink();
    let window = TimeWindow::ending_at(LOADED_AT.saturating_add_ms(10_000));
    assert!(mount_and_bail(&clock, &scheduler, window, on_state).is_err());
    assert_eq!(scheduler.active_timers(), 0);
    tick(&clock, &scheduler, 5);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn panic_unwinding_releases_timer() {
    let clock = ManualClock::new(LOADED_AT);
    let scheduler = ManualScheduler::new();
    let (seen, on_state) = offer_sink();
    let window = TimeWindow::ending_at(LOADED_AT.saturating_add_ms(10_000));

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _timer = drive_offer(clock.clone(), &scheduler, window, on_state).unwrap();
        panic!("render failed");
    }));
    assert!(result.is_err());
    assert_eq!(scheduler.active_timers(), 0);
    tick(&clock, &scheduler, 5);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn timer_may_release_itself_from_its_own_tick() {
    let clock = ManualClock::new(LOADED_AT);
    let scheduler = ManualScheduler::new();
    let slot: Rc<RefCell<Option<ScopedTimer<ManualHandle>>>> = Rc::new(RefCell::new(None));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let owner = slot.clone();
    let window = TimeWindow::ending_at(LOADED_AT.saturating_add_ms(3_000));

    let timer = drive_offer(clock.clone(), &scheduler, window, move |state: OfferState| {
        sink.borrow_mut().push(state);
        if state.is_expired {
            owner.borrow_mut().take();
        }
    })
    .unwrap();
    *slot.borrow_mut() = Some(timer);

    tick(&clock, &scheduler, 10);
    let states = seen.borrow();
    assert_eq!(states.len(), 4);
    assert!(states[3].is_expired);
    assert!(!states[3].cta_enabled());
    assert_eq!(scheduler.active_timers(), 0);
}

#[test]
fn progress_advances_with_the_clock() {
    let clock = ManualClock::new(LOADED_AT);
    let scheduler = ManualScheduler::new();
    let (seen, on_state) = offer_sink();
    let window = TimeWindow::new(
        Some(LOADED_AT.saturating_sub_ms(2_000)),
        LOADED_AT.saturating_add_ms(2_000),
    );
    let _timer = drive_offer(clock.clone(), &scheduler, window, on_state).unwrap();
    tick(&clock, &scheduler, 3);
    let percents: Vec<_> = seen
        .borrow()
        .iter()
        .map(|state| state.progress_percent)
        .collect();
    assert_eq!(percents, vec![Some(50), Some(75), Some(100), Some(100)]);
}

//! Scoped periodic timers that drive the offer countdown.
//!
//! A display acquires a [`ScopedTimer`] when it becomes visible and drops it
//! on teardown. Dropping cancels the underlying schedule exactly once, on
//! every exit path, so no tick can land after the owner is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::clock::Clock;
use crate::constants::TICK_INTERVAL_MS;
use crate::offer::{OfferState, TimeWindow};

/// Callback invoked on every period of a repeating timer.
pub type TickCallback = Box<dyn FnMut()>;

/// Errors raised when a periodic timer cannot be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("timer period must be at least one millisecond")]
    ZeroPeriod,
    #[error("scheduler unavailable: {0}")]
    Unavailable(String),
}

/// Cancellation token for a registered repeating timer.
pub trait TimerHandle {
    fn cancel(self);
}

/// Trait for abstracting periodic callback registration.
/// Platform-specific implementations should provide this
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Invoke `callback` every `period_ms` until the returned handle is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is zero or the host refuses the timer.
    fn schedule_repeating(
        &self,
        period_ms: u32,
        callback: TickCallback,
    ) -> Result<Self::Handle, ScheduleError>;
}

/// Owned repeating timer, cancelled when released or dropped.
#[must_use = "dropping a ScopedTimer cancels it immediately"]
pub struct ScopedTimer<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> ScopedTimer<H> {
    /// Register a repeating timer whose lifetime is bound to the returned guard.
    ///
    /// # Errors
    ///
    /// Propagates the scheduler's registration error.
    pub fn acquire<S>(
        scheduler: &S,
        period_ms: u32,
        callback: TickCallback,
    ) -> Result<Self, ScheduleError>
    where
        S: Scheduler<Handle = H> + ?Sized,
    {
        if period_ms == 0 {
            return Err(ScheduleError::ZeroPeriod);
        }
        let handle = scheduler.schedule_repeating(period_ms, callback)?;
        Ok(Self {
            handle: Some(handle),
        })
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel now instead of waiting for the guard to go out of scope.
    pub fn release(mut self) {
        self.cancel_once();
    }

    fn cancel_once(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for ScopedTimer<H> {
    fn drop(&mut self) {
        self.cancel_once();
    }
}

/// Start the once-per-second offer countdown.
///
/// `on_state` receives the state for the current instant immediately, then a
/// fresh [`OfferState`] on every tick until the returned guard is dropped.
///
/// # Errors
///
/// Returns an error if the scheduler cannot register the tick.
pub fn drive_offer<C, S, F>(
    clock: C,
    scheduler: &S,
    window: TimeWindow,
    mut on_state: F,
) -> Result<ScopedTimer<S::Handle>, ScheduleError>
where
    C: Clock + 'static,
    S: Scheduler + ?Sized,
    F: FnMut(OfferState) + 'static,
{
    on_state(window.state_at(clock.now()));
    ScopedTimer::acquire(
        scheduler,
        TICK_INTERVAL_MS,
        Box::new(move || on_state(window.state_at(clock.now()))),
    )
}

struct ManualTimer {
    id: u64,
    period_ms: u64,
    next_due_ms: u64,
    /// `None` while the callback is running.
    callback: Option<TickCallback>,
}

#[derive(Default)]
struct ManualInner {
    now_ms: u64,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic scheduler driven by explicit [`ManualScheduler::advance`] calls.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

/// Handle returned by [`ManualScheduler`].
pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().timers.retain(|timer| timer.id != self.id);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_repeating(
        &self,
        period_ms: u32,
        callback: TickCallback,
    ) -> Result<Self::Handle, ScheduleError> {
        if period_ms == 0 {
            return Err(ScheduleError::ZeroPeriod);
        }
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let period_ms = u64::from(period_ms);
        let next_due_ms = inner.now_ms.saturating_add(period_ms);
        inner.timers.push(ManualTimer {
            id,
            period_ms,
            next_due_ms,
            callback: Some(callback),
        });
        Ok(ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        })
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds advanced since construction.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of timers that are still registered.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move time forward, firing every callback that falls due in order.
    ///
    /// Callbacks may cancel timers (including their own) while running.
    /// Returns the number of callbacks fired.
    pub fn advance(&self, millis: u64) -> usize {
        let target = self.inner.borrow().now_ms.saturating_add(millis);
        let mut fired = 0;
        while let Some((id, mut callback)) = self.take_next_due(target) {
            callback();
            fired += 1;
            if let Some(timer) = self
                .inner
                .borrow_mut()
                .timers
                .iter_mut()
                .find(|timer| timer.id == id)
            {
                timer.callback = Some(callback);
            }
        }
        self.inner.borrow_mut().now_ms = target;
        fired
    }

    fn take_next_due(&self, target: u64) -> Option<(u64, TickCallback)> {
        let mut inner = self.inner.borrow_mut();
        let idx = inner
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.next_due_ms <= target && timer.callback.is_some())
            .min_by_key(|(_, timer)| (timer.next_due_ms, timer.id))
            .map(|(idx, _)| idx)?;
        let timer = &mut inner.timers[idx];
        let due_at = timer.next_due_ms;
        timer.next_due_ms = due_at.saturating_add(timer.period_ms);
        let id = timer.id;
        let callback = timer.callback.take()?;
        inner.now_ms = due_at;
        Some((id, callback))
    }
}

#[cfg(feature = "async")]
mod tokio_scheduler {
    use super::{ScheduleError, Scheduler, TickCallback, TimerHandle};
    use tokio::task::JoinHandle;
    use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};

    /// Scheduler backed by a `tokio::time::interval` on the current `LocalSet`.
    ///
    /// Missed ticks are skipped rather than replayed in a burst.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioScheduler;

    pub struct TokioHandle(JoinHandle<()>);

    impl TimerHandle for TokioHandle {
        fn cancel(self) {
            self.0.abort();
        }
    }

    impl Scheduler for TokioScheduler {
        type Handle = TokioHandle;

        /// # Panics
        ///
        /// Panics when called outside a `tokio::task::LocalSet`.
        fn schedule_repeating(
            &self,
            period_ms: u32,
            mut callback: TickCallback,
        ) -> Result<Self::Handle, ScheduleError> {
            if period_ms == 0 {
                return Err(ScheduleError::ZeroPeriod);
            }
            tokio::runtime::Handle::try_current()
                .map_err(|err| ScheduleError::Unavailable(err.to_string()))?;
            let period = Duration::from_millis(u64::from(period_ms));
            let task = tokio::task::spawn_local(async move {
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    ticker.tick().await;
                    callback();
                }
            });
            Ok(TokioHandle(task))
        }
    }
}

#[cfg(feature = "async")]
pub use tokio_scheduler::{TokioHandle, TokioScheduler};

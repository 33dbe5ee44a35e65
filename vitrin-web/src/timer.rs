//! Browser implementations of the core clock and scheduler, and the hooks
//! that bind their timers to component lifetimes.
//!
//! Every hook here acquires its interval in an effect and releases it in the
//! effect's cleanup, so unmounting a section (or changing its inputs) never
//! leaves a tick running against a dead component.

use vitrin_core::{
    Clock, HeaderTheme, OfferState, ScheduleError, Scheduler, TickCallback, TimeWindow,
    TimerHandle, Timestamp,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::hook;
use yew::prelude::*;

use crate::dom;

/// Wall clock read from `Date.now()` in the browser.
///
/// Native builds (server rendering, tests) fall back to the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Timestamp {
        #[cfg(target_arch = "wasm32")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let millis = js_sys::Date::now() as i64;
            Timestamp::from_millis(millis)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            vitrin_core::SystemClock.now()
        }
    }
}

/// `window.setInterval` based scheduler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

/// Registered interval; owns the JS closure so it lives exactly as long as the timer.
pub struct IntervalHandle {
    id: i32,
    closure: Closure<dyn FnMut()>,
}

impl TimerHandle for IntervalHandle {
    fn cancel(self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.id);
        }
        drop(self.closure);
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn schedule_repeating(
        &self,
        period_ms: u32,
        callback: TickCallback,
    ) -> Result<Self::Handle, ScheduleError> {
        if period_ms == 0 {
            return Err(ScheduleError::ZeroPeriod);
        }
        let timeout = i32::try_from(period_ms)
            .map_err(|_| ScheduleError::Unavailable(format!("period {period_ms}ms too large")))?;
        let win = web_sys::window()
            .ok_or_else(|| ScheduleError::Unavailable("no browser window".to_string()))?;
        let closure = Closure::wrap(callback);
        let id = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|err| ScheduleError::Unavailable(dom::js_error_message(&err)))?;
        Ok(IntervalHandle { id, closure })
    }
}

fn report_schedule_error(what: &str, err: &ScheduleError) {
    log::error!("{what} timer not started: {err}");
    dom::console_error(&format!("{what} timer not started: {err}"));
}

/// Live offer state, resampled once per second while the caller is mounted.
///
/// With `pinned` set the clock is frozen at that instant and no timer runs.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_offer_state(window: TimeWindow, pinned: Option<Timestamp>) -> OfferState {
    let state = use_state(|| window.state_at(pinned.unwrap_or_else(|| BrowserClock.now())));
    {
        let state = state.clone();
        use_effect_with((window, pinned), move |(window, pinned)| {
            let timer = match pinned {
                Some(now) => {
                    state.set(window.state_at(*now));
                    None
                }
                None => vitrin_core::drive_offer(BrowserClock, &BrowserScheduler, *window, move |next| {
                    state.set(next);
                })
                .map_err(|err| report_schedule_error("offer countdown", &err))
                .ok(),
            };
            move || drop(timer)
        });
    }
    *state
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_offer_state(window: TimeWindow, pinned: Option<Timestamp>) -> OfferState {
    window.state_at(pinned.unwrap_or_else(|| BrowserClock.now()))
}

/// Emit `on_tick` every `period_ms` while mounted; `None` pauses.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_interval(period_ms: Option<u32>, on_tick: Callback<()>) {
    use_effect_with(period_ms, move |period_ms| {
        let timer = period_ms.and_then(|period| {
            vitrin_core::ScopedTimer::acquire(
                &BrowserScheduler,
                period,
                Box::new(move || on_tick.emit(())),
            )
            .map_err(|err| report_schedule_error("interval", &err))
            .ok()
        });
        move || drop(timer)
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_interval(period_ms: Option<u32>, on_tick: Callback<()>) {
    let _ = (period_ms, on_tick);
}

/// Header theme tracking the page scroll offset.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_header_theme() -> HeaderTheme {
    let theme = use_state(|| HeaderTheme::from_scroll(dom::scroll_y()));
    {
        let theme = theme.clone();
        use_effect_with((), move |()| {
            let listener = Closure::wrap(Box::new(move || {
                theme.set(HeaderTheme::from_scroll(dom::scroll_y()));
            }) as Box<dyn FnMut()>);
            let target = web_sys::window();
            if let Some(win) = &target
                && let Err(err) = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                dom::console_error(&dom::js_error_message(&err));
            }
            move || {
                if let Some(win) = target {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }
    *theme
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_header_theme() -> HeaderTheme {
    HeaderTheme::default()
}

/// Lock page scrolling while `locked` is true.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with(locked, move |locked| {
        dom::set_body_overflow(if *locked { "hidden" } else { "" });
        || dom::set_body_overflow("")
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_scroll_lock(locked: bool) {
    let _ = locked;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct ProbeProps {
        window: TimeWindow,
        pinned: Option<Timestamp>,
    }

    #[function_component(OfferProbe)]
    fn offer_probe(props: &ProbeProps) -> Html {
        let state = use_offer_state(props.window, props.pinned);
        html! { <span>{ state.remaining.to_string() }{ if state.is_expired { " expired" } else { "" } }</span> }
    }

    #[test]
    fn pinned_clock_renders_fixed_state() {
        let now = Timestamp::from_millis(1_750_000_000_000);
        let props = ProbeProps {
            window: TimeWindow::ending_at(now.saturating_add_ms(90_061_000)),
            pinned: Some(now),
        };
        let html = block_on(LocalServerRenderer::<OfferProbe>::with_props(props).render());
        assert!(html.contains("01:01:01:01"), "{html}");
        assert!(!html.contains("expired"));
    }

    #[test]
    fn unpinned_clock_reads_the_system_time() {
        let props = ProbeProps {
            window: TimeWindow::ending_at(Timestamp::from_millis(0)),
            pinned: None,
        };
        let html = block_on(LocalServerRenderer::<OfferProbe>::with_props(props).render());
        assert!(html.contains("00:00:00:00"), "{html}");
        assert!(html.contains("expired"), "{html}");
    }

    #[test]
    fn browser_clock_is_recent_on_native_builds() {
        let now = BrowserClock.now();
        assert!(now > Timestamp::parse_rfc3339("2024-01-01T00:00:00Z").unwrap());
    }
}

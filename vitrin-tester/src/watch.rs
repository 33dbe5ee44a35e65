//! Live countdown against the wall clock, for eyeballing the ticker.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use vitrin_core::{Catalog, Clock, OfferState, SystemClock, TokioScheduler, drive_offer};

#[must_use]
pub fn describe(state: &OfferState) -> String {
    let padded = state.remaining.padded();
    let mut parts = vec![format!(
        "{}g {}s {}d {}sn",
        padded.days, padded.hours, padded.minutes, padded.seconds
    )];
    if let Some(percent) = state.progress_percent {
        parts.push(format!("ilerleme {percent}%"));
    }
    if state.is_expired {
        parts.push("süre doldu".to_string());
    }
    parts.join("  ")
}

/// Print the initial state and then one line per tick for `ticks` ticks.
///
/// # Errors
///
/// Fails if the offer window cannot be built or the timer cannot start.
pub async fn run_watch<W: Write + ?Sized>(out: &mut W, catalog: &Catalog, ticks: u32) -> Result<()> {
    let loaded_at = SystemClock.now();
    let window = catalog
        .offer_window(loaded_at)
        .context("building the offer window")?;
    writeln!(
        out,
        "{} {} → {}",
        "⏱  Watching offer".bright_cyan().bold(),
        window.start.map_or_else(|| "∅".to_string(), |s| s.to_string()),
        window.end
    )?;

    let local = LocalSet::new();
    local
        .run_until(async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let timer = drive_offer(SystemClock, &TokioScheduler, window, move |state| {
                let _ = tx.send(state);
            })
            .context("starting the offer timer")?;

            let expected = usize::try_from(ticks).unwrap_or(usize::MAX).saturating_add(1);
            for _ in 0..expected {
                let Some(state) = rx.recv().await else { break };
                writeln!(out, "{}", describe(&state))?;
                if state.is_expired {
                    break;
                }
            }
            drop(timer);
            Ok::<(), anyhow::Error>(())
        })
        .await
}

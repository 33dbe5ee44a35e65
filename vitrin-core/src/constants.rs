//! Centralized timing and presentation constants for Vitrin storefront logic.
//!
//! The countdown arithmetic, slider cadence and header behaviour all read
//! from here so the storefront can only be retuned through reviewed code
//! changes rather than through the catalog JSON.

// Time units ---------------------------------------------------------------
pub const MS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MS_PER_HOUR: i64 = 3_600_000;

// Offer countdown ----------------------------------------------------------
/// Cadence at which the offer display resamples the wall clock.
pub const TICK_INTERVAL_MS: u32 = 1_000;
/// Floor applied to the offer window length so progress never divides by zero.
pub const MIN_WINDOW_MS: i64 = 1;
/// Default offer length when the catalog only names a relative duration.
pub const DEFAULT_OFFER_HOURS: u32 = 36;
pub const PROGRESS_MAX: u8 = 100;

// Slider -------------------------------------------------------------------
pub const SLIDER_AUTOPLAY_MS: u32 = 4_500;

// Header -------------------------------------------------------------------
/// Scroll offset (px) after which the header switches to its solid theme.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 24.0;

// Catalog defaults ---------------------------------------------------------
pub const DEFAULT_PRODUCT_BADGE: &str = "Yeni";
pub const DEFAULT_OFFER_BADGE: &str = "Sınırlı";

// Carousels ----------------------------------------------------------------
pub const SHOWCASE_AUTOPLAY_MS: u32 = 2_200;
pub const SHOWCASE_PER_VIEW: usize = 4;

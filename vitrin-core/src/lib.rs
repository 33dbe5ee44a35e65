//! Vitrin Core
//!
//! Platform-agnostic storefront logic for the Flow Fashion marketing site.
//! This crate owns the limited-offer countdown, the scoped timers that drive
//! it, pricing, and the sample catalog, without any UI or browser dependencies.

pub mod catalog;
pub mod clock;
pub mod constants;
pub mod header;
pub mod newsletter;
pub mod offer;
pub mod pricing;
pub mod shipping;
pub mod slider;
pub mod ticker;
pub mod time;

// Re-export commonly used types
pub use catalog::{
    Brand, Catalog, CatalogError, Collection, DayRange, Faq, FeatureIcon, FeatureItem,
    FooterColumn, Link, Logo, OfferConfig, Product, SectionCopy, ShippingPolicy, Slide,
    SlideStyle, StatItem, Sustainability, TrustItem, ValueItem,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use header::{Drawer, HeaderTheme};
pub use newsletter::{NewsletterError, NewsletterForm, SubmitOutcome, validate_email};
pub use offer::{OfferState, PaddedTime, RemainingTime, TimeWindow, compute_offer_state};
pub use pricing::{Money, discount_percent, format_try, savings};
pub use slider::SlideCursor;
pub use ticker::{
    ManualHandle, ManualScheduler, ScheduleError, Scheduler, ScopedTimer, TickCallback,
    TimerHandle, drive_offer,
};
#[cfg(feature = "async")]
pub use ticker::{TokioHandle, TokioScheduler};
pub use time::{Timestamp, TimestampError};

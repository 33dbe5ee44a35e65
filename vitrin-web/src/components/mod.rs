pub mod collections_showcase;
pub mod daisy_ui;
pub mod feature_ticker;
pub mod footer;
pub mod header;
pub mod limited_offer;
pub mod logo_strip;
pub mod newsletter;
pub mod payment_trust;
pub mod product_card;
pub mod product_showcase;
pub mod shipping_returns;
pub mod showcase_slider;
pub mod sustainability;

pub use collections_showcase::CollectionsShowcase;
pub use feature_ticker::FeatureTicker;
pub use footer::Footer;
pub use header::Header;
pub use limited_offer::LimitedOffer;
pub use payment_trust::PaymentTrust;
pub use product_showcase::{NewArrivals, ProductShowcase};
pub use shipping_returns::ShippingReturns;
pub use showcase_slider::ShowcaseSlider;
pub use sustainability::SustainabilityValues;

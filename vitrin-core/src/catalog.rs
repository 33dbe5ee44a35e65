//! Storefront sample content and its JSON loading.
//!
//! The site has no backend: every product, slide and policy line shown on the
//! home page comes from `data/catalog.json`, embedded at compile time.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::constants::{DEFAULT_OFFER_BADGE, DEFAULT_OFFER_HOURS, DEFAULT_PRODUCT_BADGE, MS_PER_HOUR};
use crate::offer::TimeWindow;
use crate::pricing::Money;
use crate::time::{Timestamp, TimestampError};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors raised while loading or validating catalog content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
    #[error("the hero slider needs at least one slide")]
    NoSlides,
    #[error("offer references unknown product `{0}`")]
    UnknownOfferProduct(String),
    #[error("{field} delivery range invalid (min {min} > max {max})")]
    DeliveryRange {
        field: &'static str,
        min: u8,
        max: u8,
    },
    #[error("offer timing invalid: {0}")]
    OfferTiming(#[from] TimestampError),
    #[error("offer duration must be at least one hour")]
    ZeroOfferDuration,
    #[error("offer starts at {starts_at} but ends at {ends_at}")]
    InvertedOfferWindow { starts_at: String, ends_at: String },
}

/// Layout variants for hero slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideStyle {
    #[default]
    CenterDark,
    LeftLight,
    SplitRight,
    Solid,
}

/// Labelled link used for calls to action and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub cta: Option<Link>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub style: SlideStyle,
}

impl Slide {
    /// Background used when the slide has no image.
    #[must_use]
    pub fn background(&self) -> &str {
        self.bg_color.as_deref().unwrap_or("#111111")
    }
}

/// Icons available to the feature ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Heart,
    Recycle,
    Leaf,
    Truck,
    Sparkles,
}

impl FeatureIcon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Heart => "♥",
            Self::Recycle => "♻",
            Self::Leaf => "❦",
            Self::Truck => "⛟",
            Self::Sparkles => "✦",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub label: String,
    pub icon: FeatureIcon,
}

/// A product card shown in carousels, grids and the offer banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(rename = "price_kurus")]
    pub price: Money,
    #[serde(default, rename = "compare_at_kurus")]
    pub compare_at: Option<Money>,
    pub images: Vec<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

impl Product {
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Alternate image revealed on hover, if any.
    #[must_use]
    pub fn hover_image(&self) -> Option<&str> {
        self.images.get(1).map(String::as_str)
    }

    #[must_use]
    pub fn href_or_default(&self) -> String {
        self.href
            .clone()
            .unwrap_or_else(|| format!("/urun/{}", self.id))
    }

    #[must_use]
    pub fn badge_or(&self, fallback: &'static str) -> String {
        self.badge.clone().unwrap_or_else(|| fallback.to_string())
    }

    #[must_use]
    pub fn card_badge(&self) -> String {
        self.badge_or(DEFAULT_PRODUCT_BADGE)
    }

    #[must_use]
    pub fn offer_badge(&self) -> String {
        self.badge_or(DEFAULT_OFFER_BADGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub href: String,
    pub image: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub light_text: bool,
}

impl Collection {
    #[must_use]
    pub fn count_label(&self) -> Option<String> {
        self.count.map(|count| format!("{count} ürün"))
    }
}

/// Logo with optional outbound link (payment methods, carriers, certificates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustItem {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueItem {
    pub id: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub id: String,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Inclusive `[min, max]` day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    #[serde(rename = "free_shipping_threshold_kurus")]
    pub free_shipping_threshold: Money,
    pub standard_delivery_days: DayRange,
    pub express_delivery_days: DayRange,
    pub returns_window_days: u16,
    #[serde(default = "ShippingPolicy::default_exchange_allowed")]
    pub exchange_allowed: bool,
    pub support_href: String,
    pub policy_href: String,
    #[serde(default)]
    pub carriers: Vec<Logo>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl ShippingPolicy {
    const fn default_exchange_allowed() -> bool {
        true
    }
}

/// When the limited offer runs.
///
/// Absolute `ends_at`/`starts_at` win; otherwise the window is anchored at
/// page load: it ends `duration_hours` later and, with `lead_in_hours`, is
/// considered to have started that many hours earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferConfig {
    pub product_id: String,
    #[serde(default = "OfferConfig::default_title")]
    pub title: String,
    #[serde(default = "OfferConfig::default_cta_label")]
    pub cta_label: String,
    #[serde(default = "OfferConfig::default_link_label")]
    pub link_label: String,
    #[serde(default = "OfferConfig::default_duration_hours")]
    pub duration_hours: u32,
    #[serde(default)]
    pub lead_in_hours: Option<u32>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
}

impl OfferConfig {
    fn default_title() -> String {
        "Limited-Time Offers".to_string()
    }

    fn default_cta_label() -> String {
        "Sepete Ekle".to_string()
    }

    fn default_link_label() -> String {
        "Ürünü İncele".to_string()
    }

    const fn default_duration_hours() -> u32 {
        DEFAULT_OFFER_HOURS
    }

    /// Resolve the offer window relative to the page-load instant.
    ///
    /// # Errors
    ///
    /// Returns an error if an absolute timestamp cannot be parsed.
    pub fn window_from(&self, loaded_at: Timestamp) -> Result<TimeWindow, CatalogError> {
        let (start, end) = self.bounds(loaded_at)?;
        Ok(TimeWindow::new(start, end))
    }

    fn bounds(&self, loaded_at: Timestamp) -> Result<(Option<Timestamp>, Timestamp), CatalogError> {
        let end = match self.ends_at.as_deref() {
            Some(raw) => Timestamp::parse_rfc3339(raw)?,
            None => loaded_at.saturating_add_ms(hours_to_ms(self.duration_hours)),
        };
        let start = match (self.starts_at.as_deref(), self.lead_in_hours) {
            (Some(raw), _) => Some(Timestamp::parse_rfc3339(raw)?),
            (None, Some(hours)) => Some(loaded_at.saturating_sub_ms(hours_to_ms(hours))),
            (None, None) => None,
        };
        Ok((start, end))
    }
}

fn hours_to_ms(hours: u32) -> i64 {
    i64::from(hours).saturating_mul(MS_PER_HOUR)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo_top: String,
    pub logo_scrolled: String,
    pub logo_footer: String,
}

/// Titles and links for the product sections of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub see_all_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sustainability {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<String>,
    pub report_href: String,
    pub values: Vec<ValueItem>,
    pub stats: Vec<StatItem>,
    pub certifications: Vec<Logo>,
}

/// Complete storefront content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub brand: Brand,
    pub top_links: Vec<Link>,
    pub nav: Vec<Link>,
    pub slides: Vec<Slide>,
    pub features: Vec<FeatureItem>,
    pub showcase: SectionCopy,
    pub products: Vec<Product>,
    pub collections: Vec<Collection>,
    pub new_arrivals: SectionCopy,
    pub new_products: Vec<Product>,
    pub offer: OfferConfig,
    pub payments: Vec<Logo>,
    pub trust: Vec<TrustItem>,
    pub sustainability: Sustainability,
    pub shipping: ShippingPolicy,
    pub footer_columns: Vec<FooterColumn>,
    pub socials: Vec<Link>,
    pub legal_links: Vec<Link>,
}

impl Catalog {
    /// Load catalog data from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Content shipped with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Check cross-references and ranges the type system cannot express.
    ///
    /// Offer timing is checked only where it is fixed: absolute `starts_at`
    /// and `ends_at` must be ordered. A relative window always starts before
    /// its end, and an absolute start paired with a relative end depends on
    /// the load instant, so it is left to `TimeWindow::new`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.slides.is_empty() {
            return Err(CatalogError::NoSlides);
        }
        ensure_unique("slide", self.slides.iter().map(|s| s.id.as_str()))?;
        ensure_unique("product", self.products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("new product", self.new_products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("collection", self.collections.iter().map(|c| c.id.as_str()))?;
        ensure_unique(
            "value",
            self.sustainability.values.iter().map(|v| v.id.as_str()),
        )?;
        ensure_unique("stat", self.sustainability.stats.iter().map(|s| s.id.as_str()))?;

        if self.offer_product().is_none() {
            return Err(CatalogError::UnknownOfferProduct(
                self.offer.product_id.clone(),
            ));
        }
        if self.offer.ends_at.is_none() && self.offer.duration_hours == 0 {
            return Err(CatalogError::ZeroOfferDuration);
        }
        let (start, end) = self.offer.bounds(Timestamp::UNIX_EPOCH)?;
        if let (Some(starts_at), Some(ends_at)) = (&self.offer.starts_at, &self.offer.ends_at)
            && start.is_some_and(|start| start >= end)
        {
            return Err(CatalogError::InvertedOfferWindow {
                starts_at: starts_at.clone(),
                ends_at: ends_at.clone(),
            });
        }

        for (field, range) in [
            ("standard", self.shipping.standard_delivery_days),
            ("express", self.shipping.express_delivery_days),
        ] {
            if range.min > range.max {
                return Err(CatalogError::DeliveryRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Product promoted by the limited offer banner.
    #[must_use]
    pub fn offer_product(&self) -> Option<&Product> {
        self.product(&self.offer.product_id)
    }

    /// Offer window anchored at the page-load instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured timestamps cannot be parsed.
    pub fn offer_window(&self, loaded_at: Timestamp) -> Result<TimeWindow, CatalogError> {
        self.offer.window_from(loaded_at)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

//! Copy derived from the shipping and returns policy.

use crate::catalog::{DayRange, ShippingPolicy};
use crate::pricing::{Money, format_try};

/// `"1–3 iş günü"`, or a single day when the range is collapsed.
#[must_use]
pub fn standard_delivery_label(range: DayRange) -> String {
    if range.min == range.max {
        format!("{} iş günü", range.min)
    } else {
        format!("{}–{} iş günü", range.min, range.max)
    }
}

/// Express delivery that can leave the same day reads "Aynı/Ertesi Gün".
#[must_use]
pub fn express_delivery_label(range: DayRange) -> String {
    if range.min == 0 {
        "Aynı/Ertesi Gün".to_string()
    } else if range.min == range.max {
        format!("{} gün", range.min)
    } else {
        format!("{}–{} gün", range.min, range.max)
    }
}

#[must_use]
pub fn free_shipping_badge(policy: &ShippingPolicy) -> String {
    format!(
        "{} üzeri Ücretsiz Kargo",
        format_try(policy.free_shipping_threshold)
    )
}

#[must_use]
pub fn returns_badge(policy: &ShippingPolicy) -> String {
    format!("{} Gün İçinde Kolay İade", policy.returns_window_days)
}

/// Short badges shown above the shipping cards.
#[must_use]
pub fn badges(policy: &ShippingPolicy) -> Vec<String> {
    let mut out = vec![free_shipping_badge(policy), returns_badge(policy)];
    if policy.exchange_allowed {
        out.push("Değişim Desteği".to_string());
    }
    out
}

#[must_use]
pub fn returns_note(policy: &ShippingPolicy) -> String {
    if policy.exchange_allowed {
        format!(
            "Teslimattan itibaren {} gün içinde ücretsiz iade ve değişim.",
            policy.returns_window_days
        )
    } else {
        format!(
            "Teslimattan itibaren {} gün içinde ücretsiz iade.",
            policy.returns_window_days
        )
    }
}

/// Orders at or above the threshold ship free.
#[must_use]
pub fn qualifies_for_free_shipping(policy: &ShippingPolicy, order_total: Money) -> bool {
    order_total >= policy.free_shipping_threshold
}

/// Amount still needed for free shipping, `None` once it qualifies.
#[must_use]
pub fn remaining_for_free_shipping(policy: &ShippingPolicy, order_total: Money) -> Option<Money> {
    if qualifies_for_free_shipping(policy, order_total) {
        None
    } else {
        Some(policy.free_shipping_threshold.saturating_sub(order_total))
    }
}

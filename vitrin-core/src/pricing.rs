//! Turkish lira amounts and their storefront formatting.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in kuruş (1/100 TRY) to avoid floating-point issues
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_kurus(kurus: i64) -> Self {
        Self(kurus)
    }

    #[must_use]
    pub const fn from_lira(lira: i64) -> Self {
        Self(lira.saturating_mul(100))
    }

    #[must_use]
    pub const fn kurus(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_try(*self))
    }
}

/// Format as tr-TR currency: `₺1.299,90`.
#[must_use]
pub fn format_try(amount: Money) -> String {
    let sign = if amount.0 < 0 { "-" } else { "" };
    let abs = amount.0.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let frac = abs % 100;
    format!("{sign}₺{whole},{frac:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Amount saved against the compare-at price, only when it is actually higher.
#[must_use]
pub fn savings(price: Money, compare_at: Option<Money>) -> Option<Money> {
    compare_at
        .filter(|compare| *compare > price)
        .map(|compare| compare.saturating_sub(price))
}

/// Whole-number discount relative to the compare-at price, rounded half up.
///
/// `None` without a positive compare-at price.
#[must_use]
pub fn discount_percent(price: Money, compare_at: Option<Money>) -> Option<u8> {
    let compare = compare_at.filter(|compare| compare.0 > 0)?;
    let saved = savings(price, compare_at)?;
    let scaled = (200 * i128::from(saved.0) + i128::from(compare.0)) / (2 * i128::from(compare.0));
    u8::try_from(scaled.clamp(0, 100)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_tr_locale() {
        assert_eq!(format_try(Money::from_kurus(129_990)), "₺1.299,90");
        assert_eq!(format_try(Money::from_kurus(39_990)), "₺399,90");
        assert_eq!(format_try(Money::from_lira(750)), "₺750,00");
        assert_eq!(format_try(Money::from_kurus(123_456_789)), "₺1.234.567,89");
        assert_eq!(format_try(Money::ZERO), "₺0,00");
        assert_eq!(format_try(Money::from_kurus(-505)), "-₺5,05");
    }

    #[test]
    fn extreme_amounts_do_not_overflow() {
        let formatted = format_try(Money::from_kurus(i64::MIN));
        assert!(formatted.starts_with("-₺92.233.720.368.547.758"));
    }

    #[test]
    fn savings_only_when_compare_is_higher() {
        let price = Money::from_kurus(89_990);
        assert_eq!(
            savings(price, Some(Money::from_kurus(119_990))),
            Some(Money::from_kurus(30_000))
        );
        assert_eq!(savings(price, Some(price)), None);
        assert_eq!(savings(price, Some(Money::from_kurus(100))), None);
        assert_eq!(savings(price, None), None);
    }

    #[test]
    fn discount_rounds() {
        let price = Money::from_lira(75);
        assert_eq!(discount_percent(price, Some(Money::from_lira(100))), Some(25));
        assert_eq!(
            discount_percent(Money::from_kurus(66_600), Some(Money::from_lira(1_000))),
            Some(33)
        );
        assert_eq!(discount_percent(price, None), None);
    }

    #[test]
    fn discount_needs_a_positive_compare_price() {
        assert_eq!(discount_percent(Money::from_kurus(-500), Some(Money::ZERO)), None);
        assert_eq!(
            discount_percent(Money::from_kurus(-500), Some(Money::from_kurus(-100))),
            None
        );
        assert_eq!(
            discount_percent(Money::from_kurus(-500), Some(Money::from_kurus(500))),
            Some(100)
        );
    }
}

//! Millisecond-precision instants used by the offer countdown.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Absolute point in time: signed milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

/// Errors raised while reading timestamps from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid RFC 3339 timestamp `{input}`: {reason}")]
    Parse { input: String, reason: String },
}

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn saturating_add_ms(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    #[must_use]
    pub const fn saturating_sub_ms(self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }

    /// Signed distance from `self` to `later`; negative when `later` is in the past.
    #[must_use]
    pub const fn millis_until(self, later: Self) -> i64 {
        later.0.saturating_sub(self.0)
    }

    /// Parse an RFC 3339 / ISO 8601 string such as `2025-06-01T12:00:00Z`.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Parse`] when the input is not a valid RFC 3339 instant.
    pub fn parse_rfc3339(input: &str) -> Result<Self, TimestampError> {
        DateTime::parse_from_rfc3339(input.trim())
            .map(|dt| Self(dt.timestamp_millis()))
            .map_err(|err| TimestampError::Parse {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }

    /// Render as RFC 3339 in UTC with millisecond precision.
    ///
    /// Falls back to the raw millisecond count for instants chrono cannot represent.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.0).map_or_else(
            || format!("{}ms", self.0),
            |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    /// Calendar year in UTC, `None` outside chrono's range.
    #[must_use]
    pub fn year(self) -> Option<i32> {
        DateTime::<Utc>::from_timestamp_millis(self.0).map(|dt| dt.year())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_and_offset_forms() {
        let utc = Timestamp::parse_rfc3339("2025-06-01T12:00:00Z").unwrap();
        let offset = Timestamp::parse_rfc3339("2025-06-01T15:00:00+03:00").unwrap();
        assert_eq!(utc, offset);
        assert_eq!(utc.as_millis(), 1_748_779_200_000);
    }

    #[test]
    fn rejects_garbage_with_input_echoed() {
        let err = Timestamp::parse_rfc3339("next tuesday").unwrap_err();
        let TimestampError::Parse { input, .. } = err;
        assert_eq!(input, "next tuesday");
    }

    #[test]
    fn renders_millisecond_utc() {
        let ts = Timestamp::from_millis(1_748_779_200_250);
        assert_eq!(ts.to_rfc3339(), "2025-06-01T12:00:00.250Z");
        assert_eq!(ts.to_string(), ts.to_rfc3339());
        assert_eq!(ts.year(), Some(2025));
        assert_eq!(Timestamp::from_millis(i64::MAX).year(), None);
    }

    #[test]
    fn arithmetic_saturates() {
        let max = Timestamp::from_millis(i64::MAX);
        assert_eq!(max.saturating_add_ms(10), max);
        assert_eq!(
            Timestamp::from_millis(i64::MIN).millis_until(max),
            i64::MAX
        );
        assert_eq!(Timestamp::from_millis(10).millis_until(Timestamp::from_millis(4)), -6);
    }
}

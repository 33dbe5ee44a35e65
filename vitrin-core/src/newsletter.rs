//! Footer newsletter form state.
//!
//! Sign-ups are not persisted anywhere: a successful submit only clears the
//! field so the visitor can see the form reacted.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .ok()
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("e-posta adresi gerekli")]
    Empty,
    #[error("geçersiz e-posta adresi: {0}")]
    Invalid(String),
}

impl NewsletterError {
    /// Message shown under the input.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Empty => "Lütfen e-posta adresinizi girin.",
            Self::Invalid(_) => "Lütfen geçerli bir e-posta adresi girin.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Subscribed,
}

/// Check an address the way an `<input type="email" required>` would.
///
/// # Errors
///
/// Returns [`NewsletterError::Empty`] for blank input and
/// [`NewsletterError::Invalid`] when the address does not match.
pub fn validate_email(raw: &str) -> Result<&str, NewsletterError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if matches {
        Ok(email)
    } else {
        Err(NewsletterError::Invalid(email.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    last_error: Option<NewsletterError>,
    subscribed: bool,
}

impl NewsletterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&NewsletterError> {
        self.last_error.as_ref()
    }

    /// True after a successful submit until the visitor types again.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.last_error = None;
        self.subscribed = false;
    }

    /// Validate and reset the field on success; keep the input on failure.
    ///
    /// # Errors
    ///
    /// Returns the validation error, which is also kept for display.
    pub fn submit(&mut self) -> Result<SubmitOutcome, NewsletterError> {
        match validate_email(&self.email) {
            Ok(email) => {
                log::debug!("newsletter sign-up accepted for {email}");
                self.email.clear();
                self.last_error = None;
                self.subscribed = true;
                Ok(SubmitOutcome::Subscribed)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                self.subscribed = false;
                Err(err)
            }
        }
    }
}

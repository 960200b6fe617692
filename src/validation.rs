//! Field validation shared by the submission and auth endpoints.
//!
//! A [`Validator`] collects every violated rule instead of stopping at the
//! first one, so a rejected payload gets a single 400 listing all problems.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;
use crate::models::common::FlexibleValue;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$"
    )
    .unwrap();
}

pub const PHONE_DIGITS: usize = 10;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const NAME_MAX_LEN: usize = 100;
pub const TITLE_MAX_LEN: usize = 200;
pub const PROFILE_DESCRIPTION_MAX_LEN: usize = 1000;
pub const IDEA_DESCRIPTION_MAX_LEN: usize = 2000;

/// Closed set of string values accepted for an enum-like field.
pub trait Choice: Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.as_str() == value)
    }
}

/// Bounds and messages for a monetary field
#[derive(Debug, Clone, Copy)]
pub struct AmountRule {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub below_min: &'static str,
    pub above_max: &'static str,
}

pub const FUNDING_RULE: AmountRule = AmountRule {
    label: "Funding amount",
    min: 1_000.0,
    max: 1_000_000_000.0,
    below_min: "Minimum funding amount is ₹1,000",
    above_max: "Maximum funding amount is ₹100 crores",
};

pub const CAPACITY_RULE: AmountRule = AmountRule {
    label: "Investment capacity",
    min: 10_000.0,
    max: 10_000_000_000.0,
    below_min: "Minimum investment capacity is ₹10,000",
    above_max: "Maximum investment capacity is ₹1000 crores",
};

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn reject(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Trimmed, non-empty text
    pub fn required(&mut self, value: Option<&str>, label: &str) -> Option<String> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                self.reject(format!("{label} is required"));
                None
            }
        }
    }

    /// Trimmed text that may be absent or blank
    pub fn optional(&mut self, value: Option<&str>) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Character limit; absent values pass.
    pub fn max_len(&mut self, value: Option<&str>, label: &str, max: usize) {
        if value.is_some_and(|v| v.chars().count() > max) {
            self.reject(format!("{label} cannot exceed {max} characters"));
        }
    }

    /// Required, well-formed email, returned lower-cased for storage and lookups.
    pub fn email(&mut self, value: Option<&str>) -> Option<String> {
        let email = self.required(value, "Email")?;
        if !EMAIL_REGEX.is_match(&email) {
            self.reject("Please enter a valid email");
            return None;
        }
        Some(email.to_lowercase())
    }

    /// Phone number as digits only; separators such as spaces, dashes and
    /// parentheses are stripped before the length check.
    pub fn phone(&mut self, value: Option<&FlexibleValue>) -> Option<String> {
        let raw = value.map(FlexibleValue::to_text);
        let raw = self.required(raw.as_deref(), "Phone")?;
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != PHONE_DIGITS {
            self.reject("Please enter a valid 10-digit phone number");
            return None;
        }
        Some(digits)
    }

    pub fn amount(&mut self, value: Option<&FlexibleValue>, rule: &AmountRule) -> Option<f64> {
        let present = value.filter(|v| !matches!(v, FlexibleValue::Text(s) if s.trim().is_empty()));
        let Some(value) = present else {
            self.reject(format!("{} is required", rule.label));
            return None;
        };

        match value.to_number() {
            Some(amount) if amount > rule.max => {
                self.reject(rule.above_max);
                None
            }
            Some(amount) if amount >= rule.min => Some(amount),
            // Unparseable text is reported like an amount below the minimum
            _ => {
                self.reject(rule.below_min);
                None
            }
        }
    }

    /// Enum field; absent or blank falls back to `default`.
    pub fn choice<T: Choice>(&mut self, value: Option<&str>, label: &str, default: T) -> Option<T> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Some(default),
            Some(v) => {
                let parsed = T::parse(v);
                if parsed.is_none() {
                    self.reject(format!("{v} is not a valid {label}"));
                }
                parsed
            }
        }
    }

    /// Password is kept verbatim: surrounding whitespace is significant.
    pub fn password(&mut self, value: Option<&str>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => {
                if v.chars().count() < PASSWORD_MIN_LEN {
                    self.reject(format!(
                        "Password must be at least {PASSWORD_MIN_LEN} characters"
                    ));
                    return None;
                }
                Some(v.to_string())
            }
            _ => {
                self.reject("Password is required");
                None
            }
        }
    }

    /// Fail with every collected message, or assemble the cleaned value.
    ///
    /// `build` only runs when no rule was violated, so every field it unwraps
    /// with `?` is present.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::Validation(self.errors));
        }
        build().ok_or_else(|| ApiError::Validation(vec!["Invalid payload".to_string()]))
    }
}

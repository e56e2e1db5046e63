//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})\.(\d{1,2})\.(\d{1,2})$").expect("Failed to compile date regex"));

/// A type-safe wrapper for an optional birthday date.
///
/// A birthday is either absent or a real calendar date parsed from a
/// `YYYY.MM.DD` string. Once accepted, the value is held as a
/// [`NaiveDate`] — a malformed string can never be stored.
///
/// # Example
///
/// ```
/// use addressbook::domain::Birthday;
///
/// let birthday = Birthday::new(Some("1990.01.15")).unwrap();
/// assert!(birthday.is_set());
///
/// let unset = Birthday::new(None).unwrap();
/// assert!(!unset.is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Create a new Birthday from an optional raw string.
    ///
    /// `None` or a blank string stores "no date". Anything else must match
    /// the `YYYY.MM.DD` pattern and name a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not parse
    /// as a calendar date (for example month 13 or day 32).
    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(Self(None)),
            Some(s) if s.trim().is_empty() => Ok(Self(None)),
            Some(s) => Ok(Self(Some(Self::parse_date(s)?))),
        }
    }

    /// Replace the stored date, re-validating the new value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the new value is invalid;
    /// the stored date is left unchanged in that case.
    pub fn set(&mut self, raw: Option<&str>) -> Result<(), ValidationError> {
        *self = Self::new(raw)?;
        Ok(())
    }

    /// Parse and validate a `YYYY.MM.DD` string.
    fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
        let captures = DATE_REGEX
            .captures(raw)
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))?;

        // The pattern guarantees each capture is a short digit run, so the
        // integer parses cannot fail; range errors surface via from_ymd_opt.
        let year: i32 = captures[1].parse().unwrap_or_default();
        let month: u32 = captures[2].parse().unwrap_or_default();
        let day: u32 = captures[3].parse().unwrap_or_default();

        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Get the stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether a date is stored.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Returns `None` when no date is stored, and also when the occurrence
    /// does not exist in the target year (a Feb 29 birthday in a non-leap
    /// year) — that case is absorbed rather than propagated.
    ///
    /// The occurrence used is this year's (month, day) unless it falls
    /// strictly before `today`, in which case next year's is used. Calling
    /// on the birthday itself yields 0.
    pub fn days_until_next(&self, today: NaiveDate) -> Option<i64> {
        let date = self.0?;

        let mut next = NaiveDate::from_ymd_opt(today.year(), date.month(), date.day());
        if matches!(next, Some(d) if d < today) {
            next = NaiveDate::from_ymd_opt(today.year() + 1, date.month(), date.day());
        }

        match next {
            Some(d) => Some((d - today).num_days()),
            None => {
                tracing::warn!(
                    birthday = %date,
                    year = today.year(),
                    "birthday has no occurrence in target year"
                );
                None
            }
        }
    }
}

// Serde support - serialize as an optional formatted string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0
            .map(|d| d.format("%Y.%m.%d").to_string())
            .serialize(serializer)
    }
}

// Serde support - deserialize from an optional string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Birthday::new(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

// Display support - formatted date, or "-" when unset
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format("%Y.%m.%d")),
            None => write!(f, "-"),
        }
    }
}

//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields and signed years, so the shape is
// checked before the calendar parse.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A contact's date of birth.
///
/// Keeps both the original `DD.MM.YYYY` text (for display) and the parsed
/// Gregorian date (for arithmetic).
///
/// # Example
///
/// ```
/// use address_book_assistant::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
/// assert!(Birthday::new("30.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not
    /// zero-padded `DD.MM.YYYY` or names a date that does not exist.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();

        if !BIRTHDAY_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// The text the birthday was created from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.01.2000").unwrap();
        assert_eq!(birthday.as_str(), "01.01.2000");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_accepts_real_leap_day() {
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("31.04.2020").is_err());
        assert!(Birthday::new("00.01.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("2020.01.01").is_err());
        assert!(Birthday::new("2020-01-01").is_err());
        assert!(Birthday::new("1.6.1990").is_err());
        assert!(Birthday::new("01.06.90").is_err());
        assert!(Birthday::new("01/06/1990").is_err());
        assert!(Birthday::new("01.06.1990 ").is_err());
    }

    #[test]
    fn test_birthday_error_names_format() {
        let err = Birthday::new("someday").unwrap_err();
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }

    #[test]
    fn test_birthday_serde_uses_original_text() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);

        let tampered: Result<Birthday, _> = serde_json::from_str("\"31.02.1990\"");
        assert!(tampered.is_err());
    }
}

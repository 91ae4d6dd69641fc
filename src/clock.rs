//! Source of the current date for birthday queries.

use chrono::{Local, NaiveDate};

/// Provides "today" to the session so date-dependent commands can be tested
/// against a pinned calendar day.
pub trait Clock {
    /// The current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }
}

//! Calendar arithmetic for yearly recurring dates.
//!
//! A Feb 29 date has no counterpart in non-leap years; there it is observed
//! on Feb 28.

use chrono::{Datelike, NaiveDate};

/// The month/day of `date` placed in `year`.
///
/// Returns `None` only when `year` lies outside the range chrono can
/// represent.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first anniversary of `date` falling on or after `today`.
pub fn next_anniversary(date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(date, today.year())?;
    if this_year < today {
        anniversary_in_year(date, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Whole days from `today` until the next anniversary of `date`.
///
/// Never negative; zero when the anniversary is today.
pub fn days_until_next(date: NaiveDate, today: NaiveDate) -> Option<i64> {
    next_anniversary(date, today).map(|next| (next - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anniversary_in_year_keeps_month_and_day() {
        assert_eq!(anniversary_in_year(ymd(1990, 6, 15), 2024), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28_in_common_year() {
        assert_eq!(anniversary_in_year(ymd(2000, 2, 29), 2023), Some(ymd(2023, 2, 28)));
        assert_eq!(anniversary_in_year(ymd(2000, 2, 29), 2024), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_next_anniversary_rolls_over_year_end() {
        assert_eq!(
            next_anniversary(ymd(1990, 1, 5), ymd(2024, 12, 30)),
            Some(ymd(2025, 1, 5))
        );
        assert_eq!(days_until_next(ymd(1990, 1, 5), ymd(2024, 12, 30)), Some(6));
    }

    #[test]
    fn test_days_until_next_is_zero_on_the_day() {
        assert_eq!(days_until_next(ymd(1990, 6, 1), ymd(2024, 6, 1)), Some(0));
    }

    #[test]
    fn test_days_until_next_for_passed_date_counts_to_next_year() {
        // 2024-05-15 has passed on 2024-06-01; next is 2025-05-15.
        assert_eq!(days_until_next(ymd(1990, 5, 15), ymd(2024, 6, 1)), Some(348));
    }

    #[test]
    fn test_leap_day_next_anniversary_from_common_year() {
        // Observed on Feb 28 in 2023, which has already passed on Mar 1.
        assert_eq!(
            next_anniversary(ymd(2000, 2, 29), ymd(2023, 3, 1)),
            Some(ymd(2024, 2, 29))
        );
        assert_eq!(days_until_next(ymd(2000, 2, 29), ymd(2023, 2, 28)), Some(0));
    }
}

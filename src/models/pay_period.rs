//! Pay period model and calendar helpers.
//!
//! This module contains the [`PayPeriod`] type, the target month and year
//! every synthetic pay date falls in, together with the Gregorian
//! [`days_in_month`] rule used by date rotation.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::config::Settings;
use crate::error::{PayrollError, PayrollResult};

/// Returns true for Gregorian leap years.
///
/// A year is a leap year if it is divisible by 4 and not by 100, or if it is
/// divisible by 400.
///
/// ```
/// use paycompute::models::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Months outside 1-12 fall through to 31, matching the fixed table; callers
/// validate the month through [`PayPeriod::new`].
///
/// ```
/// use paycompute::models::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 1900), 28);
/// assert_eq!(days_in_month(9, 2024), 30);
/// assert_eq!(days_in_month(12, 2024), 31);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// The month and year a payroll run targets.
///
/// Constructed only through [`PayPeriod::new`], which enforces the
/// configured month and year ranges.
///
/// # Example
///
/// ```
/// use paycompute::config::Settings;
/// use paycompute::models::PayPeriod;
///
/// let period = PayPeriod::new(9, 2024, &Settings::default()).unwrap();
/// assert_eq!(period.days_in_month(), 30);
/// assert_eq!(period.date_for_day(30).format("%d/%m/%Y").to_string(), "30/09/2024");
/// assert!(PayPeriod::new(13, 2024, &Settings::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayPeriod {
    month: u32,
    year: i32,
    first_day: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period after checking the configured ranges.
    pub fn new(month: u32, year: i32, settings: &Settings) -> PayrollResult<Self> {
        let invalid = |message: String| PayrollError::InvalidPeriod {
            month,
            year,
            message,
        };

        if month < settings.min_month || month > settings.max_month {
            return Err(invalid(format!(
                "month must be between {} and {}",
                settings.min_month, settings.max_month
            )));
        }
        if year < settings.min_year || year > settings.max_year {
            return Err(invalid(format!(
                "year must be between {} and {}",
                settings.min_year, settings.max_year
            )));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| invalid("not a calendar month".to_string()))?;

        Ok(Self {
            month,
            year,
            first_day,
        })
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month, self.year)
    }

    /// Returns the date of `day` in this month, clamped to the month's range.
    pub fn date_for_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days_in_month());
        self.first_day + Days::new(u64::from(day - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_century_leap_rules() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (idx, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(idx as u32 + 1, 2023), *days, "month {}", idx + 1);
        }
        assert_eq!(days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_period_rejects_month_out_of_range() {
        let settings = Settings::default();
        match PayPeriod::new(0, 2024, &settings) {
            Err(PayrollError::InvalidPeriod { month, message, .. }) => {
                assert_eq!(month, 0);
                assert!(message.contains("month"));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_period_rejects_year_out_of_range() {
        let settings = Settings::default();
        assert!(PayPeriod::new(1, 2019, &settings).is_err());
        assert!(PayPeriod::new(1, 2051, &settings).is_err());
        assert!(PayPeriod::new(1, 2050, &settings).is_ok());
    }

    #[test]
    fn test_date_for_day_clamps() {
        let period = PayPeriod::new(2, 2023, &Settings::default()).unwrap();
        assert_eq!(period.date_for_day(0).day(), 1);
        assert_eq!(period.date_for_day(31).day(), 28);
        assert_eq!(period.date_for_day(15).month(), 2);
    }

    #[test]
    fn test_period_accessors() {
        let period = PayPeriod::new(12, 2030, &Settings::default()).unwrap();
        assert_eq!(period.month(), 12);
        assert_eq!(period.year(), 2030);
        assert_eq!(period.days_in_month(), 31);
    }
}

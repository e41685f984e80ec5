//! Calendar and sidereal time calculations.
//!
//! The pipeline's single time variable is a continuous day count since the
//! J2000.0 epoch (2000-01-01 12:00 UTC). It is computed by exact integer
//! summation over whole years and months, so the mapping from calendar date
//! to day count is precise for any year from 2000 on.

use crate::{Error, Result};

/// Day lengths for January through December in a non-leap year.
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A validated calendar date and local wall-clock time.
///
/// Construction rejects anything outside the supported domain: years before
/// 2000, out-of-range months, hours or minutes, and days that do not exist
/// in the given month (February 29 outside leap years included).
///
/// # Example
/// ```
/// use suntimes::Instant;
///
/// let instant = Instant::new(2020, 8, 21, 14, 47).unwrap();
/// assert_eq!(instant.day(), 21);
///
/// assert!(Instant::new(1999, 12, 31, 23, 59).is_err());
/// assert!(Instant::new(2023, 2, 29, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl Instant {
    /// Creates a validated instant from local calendar components.
    ///
    /// # Errors
    /// Returns `InvalidInstant` naming the first violated constraint:
    /// year below 2000, month outside 1-12, day outside the month's length
    /// (leap-year aware), hour above 23, or minute above 59.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        if year < 2000 {
            return Err(Error::invalid_instant("year must be 2000 or later"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_instant("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_instant("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_instant("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_instant("minute must be between 0 and 59"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the local hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Fractional hours since UTC midnight of the calendar day.
    ///
    /// Can be negative or exceed 24 when the timezone offset shifts the
    /// local wall clock across the UTC date boundary; the day-count
    /// arithmetic absorbs that as a fraction without rolling the date.
    #[must_use]
    pub fn hours_utc(&self, timezone_offset_hours: f64) -> f64 {
        f64::from(self.hour) - timezone_offset_hours + f64::from(self.minute) / 60.0
    }

    /// Continuous days since 2000-01-01 12:00 UTC at the given UTC hour.
    ///
    /// Sums whole days for the years 2000..year and the months preceding
    /// this one, then centers the fractional part on the noon epoch.
    #[must_use]
    pub fn day_count(&self, hours_utc: f64) -> f64 {
        let mut days: i64 = 0;
        for year in 2000..self.year {
            days += if is_leap_year(year) { 366 } else { 365 };
        }
        for month in 1..self.month {
            days += i64::from(days_in_month(self.year, month));
        }
        days += i64::from(self.day) - 1;
        days as f64 + (hours_utc - 12.0) / 24.0
    }

    /// Day count at UTC midnight of the calendar day.
    ///
    /// This is the time argument for the sidereal-time stage.
    #[must_use]
    pub fn day_count_midnight(&self) -> f64 {
        self.day_count(0.0)
    }
}

/// Gregorian leap-year predicate.
///
/// Divisible by 400 is a leap year; otherwise divisible by 4 but not by
/// 100 is a leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in a month, leap-year aware.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[(month - 1) as usize]
    }
}

/// Local hour angle of the vernal equinox in degrees.
///
/// Computes the Greenwich mean sidereal time for the given UTC hour of the
/// day whose midnight day count is `day_count_midnight`, converts it to
/// degrees, and shifts it by the observer's longitude (east positive).
/// The result is intentionally not normalized; the horizontal transform
/// consumes it through periodic functions.
#[must_use]
pub fn local_equinox_hour_angle(day_count_midnight: f64, hours_utc: f64, longitude: f64) -> f64 {
    let centuries = day_count_midnight / 36525.0;
    let mean_sidereal_hours = 6.697376 + 2400.05134 * centuries + 1.002738 * hours_utc;
    15.0 * mean_sidereal_hours + longitude
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2400));

        assert!(!is_leap_year(2001));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2200));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_instant_validation() {
        assert!(Instant::new(2020, 8, 21, 14, 47).is_ok());
        assert!(Instant::new(2000, 1, 1, 0, 0).is_ok());
        assert!(Instant::new(2024, 2, 29, 23, 59).is_ok());

        assert!(Instant::new(1999, 6, 1, 0, 0).is_err()); // year below domain
        assert!(Instant::new(2023, 13, 1, 0, 0).is_err()); // month
        assert!(Instant::new(2023, 0, 1, 0, 0).is_err());
        assert!(Instant::new(2023, 1, 32, 0, 0).is_err()); // day
        assert!(Instant::new(2023, 2, 30, 0, 0).is_err());
        assert!(Instant::new(2023, 2, 29, 0, 0).is_err()); // non-leap February
        assert!(Instant::new(2023, 1, 0, 0, 0).is_err());
        assert!(Instant::new(2023, 1, 1, 24, 0).is_err()); // hour
        assert!(Instant::new(2023, 1, 1, 0, 60).is_err()); // minute
    }

    #[test]
    fn test_day_count_epoch() {
        let epoch = Instant::new(2000, 1, 1, 12, 0).unwrap();
        assert!(epoch.day_count(12.0).abs() < EPSILON);
        assert!((epoch.day_count_midnight() - (-0.5)).abs() < EPSILON);
    }

    #[test]
    fn test_day_count_known_values() {
        // 2000 is a leap year: March 1 is day 60.
        let march = Instant::new(2000, 3, 1, 12, 0).unwrap();
        assert!((march.day_count(12.0) - 60.0).abs() < EPSILON);

        let next_year = Instant::new(2001, 1, 1, 12, 0).unwrap();
        assert!((next_year.day_count(12.0) - 366.0).abs() < EPSILON);

        // 2000-2100 contains 25 leap years (2100 itself is not one).
        let next_century = Instant::new(2101, 1, 1, 12, 0).unwrap();
        assert!((next_century.day_count(12.0) - 36890.0).abs() < EPSILON);

        // Reference instant: 2020-08-21 14:47 CEST = 12:47 UTC.
        let berlin = Instant::new(2020, 8, 21, 14, 47).unwrap();
        let hours_utc = berlin.hours_utc(2.0);
        assert!((hours_utc - 12.783333333333333).abs() < EPSILON);
        assert!((berlin.day_count(hours_utc) - 7538.032638888889).abs() < EPSILON);
        assert!((berlin.day_count_midnight() - 7537.5).abs() < EPSILON);
    }

    #[test]
    fn test_day_count_monotonicity() {
        let instants = [
            Instant::new(2000, 1, 1, 12, 1).unwrap(),
            Instant::new(2000, 1, 1, 13, 0).unwrap(),
            Instant::new(2000, 1, 2, 0, 0).unwrap(),
            Instant::new(2000, 2, 29, 23, 59).unwrap(),
            Instant::new(2000, 3, 1, 0, 0).unwrap(),
            Instant::new(2004, 12, 31, 23, 59).unwrap(),
            Instant::new(2005, 1, 1, 0, 0).unwrap(),
            Instant::new(2100, 2, 28, 12, 0).unwrap(),
            Instant::new(2100, 3, 1, 0, 0).unwrap(),
        ];

        let mut previous = Instant::new(2000, 1, 1, 12, 0).unwrap();
        for instant in instants {
            let earlier = previous.day_count(previous.hours_utc(0.0));
            let later = instant.day_count(instant.hours_utc(0.0));
            assert!(
                later > earlier,
                "day count must increase: {previous:?} -> {instant:?}"
            );
            previous = instant;
        }
    }

    #[test]
    fn test_local_equinox_hour_angle_reference() {
        let instant = Instant::new(2020, 8, 21, 14, 47).unwrap();
        let hours_utc = instant.hours_utc(2.0);
        let angle = local_equinox_hour_angle(instant.day_count_midnight(), hours_utc, 13.377778);
        assert!((angle - 7735.4304624568795).abs() < 1e-6);
    }
}

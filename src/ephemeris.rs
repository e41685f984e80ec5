//! Low-precision solar ephemeris.
//!
//! Equatorial sun coordinates from the standard low-precision approximation
//! (Astronomical Almanac), good to about one arcminute for years after 2000.
//! The single time argument is the continuous day count since J2000.0.

#![allow(clippy::unreadable_literal)]

use crate::math::{normalize_degrees_0_to_360, polynomial, resolve_quadrant};

/// Ratio between a sidereal and a mean solar time interval.
const SIDEREAL_RATE: f64 = 1.0027379;

/// Equatorial coordinates of the sun at one instant.
///
/// Immutable once computed from a day count.
///
/// # Example
/// ```
/// use suntimes::SolarEphemeris;
///
/// // 2020-08-21 12:47 UTC
/// let ephemeris = SolarEphemeris::from_day_count(7538.032638888889);
/// assert!((ephemeris.declination() - 0.20678392259405476).abs() < 1e-12);
/// assert!((ephemeris.right_ascension() - 2.6364434504534477).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    /// Declination in radians (angle north/south of the celestial equator).
    declination: f64,
    /// Right ascension in radians, quadrant-corrected.
    right_ascension: f64,
}

impl SolarEphemeris {
    /// Computes the sun's equatorial coordinates for a day count.
    ///
    /// Follows the ecliptic route: mean longitude and mean anomaly (secular
    /// linear terms), the two-term equation-of-center correction to the
    /// ecliptic longitude, then projection through the obliquity of the
    /// ecliptic into declination and right ascension.
    ///
    /// The raw arctangent for right ascension is ambiguous by half a turn;
    /// the sign of cos(ecliptic longitude) selects the correct half-plane.
    #[must_use]
    pub fn from_day_count(day_count: f64) -> Self {
        let t = day_count;

        let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.9856474 * t);
        let mean_anomaly = normalize_degrees_0_to_360(357.528 + 0.9856003 * t).to_radians();
        let obliquity = (23.43929111 - 0.0000004 * t).to_radians();

        let ecliptic_longitude = (mean_longitude
            + 1.915 * mean_anomaly.sin()
            + 0.020 * (2.0 * mean_anomaly).sin())
        .to_radians();

        let declination = (obliquity.sin() * ecliptic_longitude.sin()).asin();
        let right_ascension = resolve_quadrant(
            (ecliptic_longitude.tan() * obliquity.cos()).atan(),
            ecliptic_longitude.cos(),
        );

        Self {
            declination,
            right_ascension,
        }
    }

    /// Gets the declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the right ascension in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the right ascension expressed in hours (24h per full turn).
    #[must_use]
    pub fn right_ascension_hours(&self) -> f64 {
        24.0 * self.right_ascension / core::f64::consts::TAU
    }
}

/// Mean right ascension of the sun in hours, in [0, 24).
///
/// Secular polynomial in Julian centuries since J2000.0; the difference
/// between this mean value and the true right ascension is what drives the
/// equation of time.
#[must_use]
pub fn mean_right_ascension_hours(centuries: f64) -> f64 {
    polynomial(
        &[18.71506921, 2400.0513369, 0.000025862, -0.00000000172],
        centuries,
    )
    .rem_euclid(24.0)
}

/// Equation-of-time correction in hours for a given instant.
///
/// `day_count` must be the day count of the exact instant (not midnight);
/// the correction converts local world time to mean local time.
///
/// The mean right ascension lives in [0, 24) while the true right ascension
/// comes out of the quadrant correction in (-6, 18), so their difference is
/// wrapped into [-12, 12] before scaling.
#[must_use]
pub fn equation_of_time_hours(day_count: f64, ephemeris: &SolarEphemeris) -> f64 {
    let centuries = day_count / 36525.0;
    let mut delta = mean_right_ascension_hours(centuries) - ephemeris.right_ascension_hours();
    if delta < -12.0 {
        delta += 24.0;
    } else if delta > 12.0 {
        delta -= 24.0;
    }
    SIDEREAL_RATE * delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    /// Day count for the reference instant 2020-08-21 12:47 UTC.
    const REFERENCE_DAY_COUNT: f64 = 7538.032638888889;

    #[test]
    fn test_reference_ephemeris() {
        let ephemeris = SolarEphemeris::from_day_count(REFERENCE_DAY_COUNT);
        assert!((ephemeris.declination() - 0.20678392259405476).abs() < EPSILON);
        assert!((ephemeris.right_ascension() - 2.6364434504534477).abs() < EPSILON);
        assert!((ephemeris.right_ascension_hours() - 10.070472175726048).abs() < EPSILON);
    }

    #[test]
    fn test_declination_bounds() {
        // Declination never exceeds the obliquity of the ecliptic.
        let obliquity_bound = 23.45_f64.to_radians();
        for day in 0..730 {
            let ephemeris = SolarEphemeris::from_day_count(f64::from(day));
            assert!(
                ephemeris.declination().abs() <= obliquity_bound,
                "declination out of bounds on day {day}"
            );
        }
    }

    #[test]
    fn test_right_ascension_quadrant() {
        // Around the solstices the ecliptic longitude passes 90° and 270°,
        // where the raw arctangent flips sign; the corrected right ascension
        // must keep advancing without half-turn jumps.
        let mut previous = SolarEphemeris::from_day_count(0.0).right_ascension();
        for day in 1..366 {
            let current = SolarEphemeris::from_day_count(f64::from(day)).right_ascension();
            let mut step = current - previous;
            if step < 0.0 {
                step += 2.0 * PI; // annual wrap from ~2π back to 0
            }
            assert!(
                step < 0.1,
                "right ascension jumped by {step} rad on day {day}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_mean_right_ascension_range() {
        for i in 0..100 {
            let centuries = f64::from(i) * 0.013;
            let hours = mean_right_ascension_hours(centuries);
            assert!((0.0..24.0).contains(&hours), "out of range: {hours}");
        }
    }

    #[test]
    fn test_equation_of_time_reference() {
        let ephemeris = SolarEphemeris::from_day_count(REFERENCE_DAY_COUNT);
        let correction = equation_of_time_hours(REFERENCE_DAY_COUNT, &ephemeris);
        assert!((correction - (-0.03268995640154675)).abs() < EPSILON);
    }

    #[test]
    fn test_equation_of_time_magnitude() {
        // The equation of time stays within about ±17 minutes. Scanning a
        // full century crosses the points where the true right ascension
        // sits just below a 24h wrap while the mean value sits just above
        // (and vice versa), which the [-12, 12] wrap must absorb.
        for day in (0..36525).step_by(3) {
            let t = f64::from(day);
            let ephemeris = SolarEphemeris::from_day_count(t);
            let correction = equation_of_time_hours(t, &ephemeris);
            assert!(
                correction.abs() < 0.3,
                "equation of time {correction} h on day count {t}"
            );
        }
    }

    #[test]
    fn test_equation_of_time_wrap_regression() {
        // Day count 28844 (a late-2078 date): the unwrapped difference is
        // just above +24 h and must come back as a few-minute correction.
        let t = 28844.0;
        let ephemeris = SolarEphemeris::from_day_count(t);
        let correction = equation_of_time_hours(t, &ephemeris);
        assert!((correction - 0.048883).abs() < 1e-3, "got {correction}");
    }
}

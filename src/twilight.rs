//! Twilight threshold solver and clock-time conversion.
//!
//! For each reference solar altitude the solver computes the hour-angle
//! half-width of the day arc: half the time interval, centered on local
//! solar noon, during which the sun stands above that altitude. When the
//! inverse-cosine argument leaves [-1, 1] the sun never crosses the
//! threshold that day (polar day or polar night); that is a designed result,
//! not an error, and must never reach the inverse cosine itself.

use core::f64::consts::PI;
use core::fmt;

use crate::error::{check_coordinates, check_latitude};
use crate::{Result, SolarEphemeris};

/// Reference solar altitudes for sunrise/sunset and the twilight levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    /// Sunrise/sunset: upper limb on the horizon, 50 arcminutes below zero
    /// (34' refraction plus 16' solar semi-diameter).
    SunriseSunset,
    /// Civil twilight (sun 6° below the horizon).
    CivilTwilight,
    /// Nautical twilight (sun 12° below the horizon).
    NauticalTwilight,
    /// Astronomical twilight (sun 18° below the horizon).
    AstronomicalTwilight,
}

impl Threshold {
    /// All thresholds, from the deepest (astronomical) to sunrise/sunset.
    ///
    /// This is the order of the morning lines in the report; the evening
    /// lines use the reverse.
    pub const ALL: [Self; 4] = [
        Self::AstronomicalTwilight,
        Self::NauticalTwilight,
        Self::CivilTwilight,
        Self::SunriseSunset,
    ];

    /// Gets the target solar altitude in degrees for this threshold.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        match self {
            Self::SunriseSunset => -50.0 / 60.0,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
        }
    }

    /// Gets the target solar altitude in radians.
    #[must_use]
    pub fn altitude_radians(&self) -> f64 {
        self.altitude_degrees().to_radians()
    }
}

/// Day arc of the sun relative to one threshold altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayArc {
    /// The sun crosses the threshold; the half-width is the time in hours
    /// between the morning crossing and local solar noon.
    Crossing {
        /// Half-width of the day arc in hours (0 to 12).
        half_width_hours: f64,
    },
    /// Polar day: the sun stays above the threshold all day.
    AllDay,
    /// Polar night: the sun stays below the threshold all day.
    AllNight,
}

impl DayArc {
    /// Converts the day arc into local clock times for the two crossings.
    ///
    /// Applies, in order: the noon-centered world times `12 ∓ half-width`,
    /// the equation-of-time correction, the longitude offset from Greenwich
    /// (15° per hour), and the timezone offset. Polar arcs pass through
    /// unchanged. If both crossings collapse onto the same clock minute the
    /// result degenerates into the matching polar variant; the domain check
    /// that produced this arc remains the primary no-crossing signal.
    #[must_use]
    pub fn crossing_times(
        &self,
        equation_of_time_hours: f64,
        longitude: f64,
        timezone_offset_hours: f64,
    ) -> CrossingTimes {
        let half_width_hours = match self {
            Self::AllDay => return CrossingTimes::AllDay,
            Self::AllNight => return CrossingTimes::AllNight,
            Self::Crossing { half_width_hours } => *half_width_hours,
        };

        let correction = equation_of_time_hours - longitude / 15.0 + timezone_offset_hours;
        let morning = ClockTime::from_hours(12.0 - half_width_hours + correction);
        let evening = ClockTime::from_hours(12.0 + half_width_hours + correction);

        if morning == evening {
            // Grazing arc: the sun only touches the threshold. A near-zero
            // half-width means it stays below, a near-12h one above.
            if half_width_hours < 6.0 {
                CrossingTimes::AllNight
            } else {
                CrossingTimes::AllDay
            }
        } else {
            CrossingTimes::RegularDay { morning, evening }
        }
    }
}

/// Solves the hour-angle half-width of the day arc for one threshold.
///
/// The inverse-cosine argument `(sin h₀ - sin φ sin δ) / (cos φ cos δ)`
/// leaves [-1, 1] exactly when the sun never reaches the threshold
/// altitude on that day at that latitude.
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90°.
///
/// # Example
/// ```
/// use suntimes::{twilight::day_arc, DayArc, SolarEphemeris, Threshold};
///
/// // Berlin, 2020-08-21: the sun rises about 7.16 h before solar noon.
/// let ephemeris = SolarEphemeris::from_day_count(7538.032638888889);
/// let arc = day_arc(Threshold::SunriseSunset, &ephemeris, 52.516389).unwrap();
/// let DayArc::Crossing { half_width_hours } = arc else { panic!("expected crossing") };
/// assert!((half_width_hours - 7.155739).abs() < 1e-5);
/// ```
pub fn day_arc(threshold: Threshold, ephemeris: &SolarEphemeris, latitude: f64) -> Result<DayArc> {
    check_latitude(latitude)?;

    let latitude_rad = latitude.to_radians();
    let declination = ephemeris.declination();
    let argument = (threshold.altitude_radians().sin() - latitude_rad.sin() * declination.sin())
        / (latitude_rad.cos() * declination.cos());

    if argument < -1.0 {
        Ok(DayArc::AllDay)
    } else if argument > 1.0 {
        Ok(DayArc::AllNight)
    } else {
        Ok(DayArc::Crossing {
            half_width_hours: 12.0 * argument.acos() / PI,
        })
    }
}

/// A local wall-clock time of day with minute resolution.
///
/// Decimal hours convert by truncation toward zero on the integer hour
/// before the minute remainder is taken, and the hour wraps into [0, 23]
/// when a crossing falls on the neighboring calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: i32,
    minute: i32,
}

impl ClockTime {
    /// Converts decimal hours to a clock time.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        let whole = hours.trunc();
        let minute = ((hours - whole) * 60.0).trunc() as i32;
        let mut hour = whole as i32;
        while hour > 23 {
            hour -= 24;
        }
        while hour < 0 {
            hour += 24;
        }
        Self { hour, minute }
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> i32 {
        self.hour
    }

    /// Gets the minute.
    #[must_use]
    pub const fn minute(&self) -> i32 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Morning and evening crossing times for one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingTimes {
    /// The sun crosses the threshold twice.
    RegularDay {
        /// Local clock time of the morning crossing.
        morning: ClockTime,
        /// Local clock time of the evening crossing.
        evening: ClockTime,
    },
    /// Polar day: no crossing, the sun stays above the threshold.
    AllDay,
    /// Polar night: no crossing, the sun stays below the threshold.
    AllNight,
}

impl CrossingTimes {
    /// Gets the morning crossing time, if the sun crosses at all.
    #[must_use]
    pub const fn morning(&self) -> Option<ClockTime> {
        match self {
            Self::RegularDay { morning, .. } => Some(*morning),
            _ => None,
        }
    }

    /// Gets the evening crossing time, if the sun crosses at all.
    #[must_use]
    pub const fn evening(&self) -> Option<ClockTime> {
        match self {
            Self::RegularDay { evening, .. } => Some(*evening),
            _ => None,
        }
    }

    /// Checks if this is a no-crossing (polar day/night) result.
    #[must_use]
    pub const fn is_no_crossing(&self) -> bool {
        !matches!(self, Self::RegularDay { .. })
    }
}

/// Crossing times for all four thresholds of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwilightTimes {
    /// Sunrise and sunset (-50').
    pub sunrise: CrossingTimes,
    /// Civil dawn, morning and evening (-6°).
    pub civil: CrossingTimes,
    /// Nautical dawn, morning and evening (-12°).
    pub nautical: CrossingTimes,
    /// Astronomical dawn, morning and evening (-18°).
    pub astronomical: CrossingTimes,
}

impl TwilightTimes {
    /// Gets the crossing times for one threshold.
    #[must_use]
    pub const fn for_threshold(&self, threshold: Threshold) -> CrossingTimes {
        match threshold {
            Threshold::SunriseSunset => self.sunrise,
            Threshold::CivilTwilight => self.civil,
            Threshold::NauticalTwilight => self.nautical,
            Threshold::AstronomicalTwilight => self.astronomical,
        }
    }
}

/// Solves all four thresholds and converts them to local clock times.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates. Polar day/night is not an error.
pub fn twilight_times(
    ephemeris: &SolarEphemeris,
    latitude: f64,
    equation_of_time_hours: f64,
    longitude: f64,
    timezone_offset_hours: f64,
) -> Result<TwilightTimes> {
    check_coordinates(latitude, longitude)?;

    let mut solve = |threshold: Threshold| -> Result<CrossingTimes> {
        let arc = day_arc(threshold, ephemeris, latitude)?;
        Ok(arc.crossing_times(equation_of_time_hours, longitude, timezone_offset_hours))
    };

    Ok(TwilightTimes {
        sunrise: solve(Threshold::SunriseSunset)?,
        civil: solve(Threshold::CivilTwilight)?,
        nautical: solve(Threshold::NauticalTwilight)?,
        astronomical: solve(Threshold::AstronomicalTwilight)?,
    })
}

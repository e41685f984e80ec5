//! Observer site parameters and timezone resolution.
//!
//! The parameter file is a plain key/value format, one pair per line,
//! separated by whitespace:
//!
//! ```text
//! latitude   52.516389
//! longitude  13.377778
//! timezone   Europe/Berlin
//! ```
//!
//! Keys are case-insensitive and may appear in any order; unknown keys are
//! ignored. All three keys are required and a missing one is reported
//! before any astronomical computation runs.

use chrono::offset::LocalResult;
use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::check_coordinates;
use crate::{Error, Instant, Result};

/// Observer location and timezone, parsed from a parameter file.
///
/// # Example
/// ```
/// use suntimes::SiteParams;
///
/// let params = SiteParams::parse(
///     "latitude 52.516389\nlongitude 13.377778\ntimezone Europe/Berlin\n",
/// )
/// .unwrap();
/// assert_eq!(params.latitude(), 52.516389);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteParams {
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

impl SiteParams {
    /// Parses site parameters from parameter file text.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a known key with a missing or
    /// unparseable value, `UnknownTimezone` for an unresolvable timezone
    /// identifier, `MissingParameter` for an absent required key, and
    /// `InvalidLatitude`/`InvalidLongitude` for out-of-range coordinates.
    pub fn parse(text: &str) -> Result<Self> {
        let mut latitude = None;
        let mut longitude = None;
        let mut timezone = None;

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let Some(key) = fields.next() else {
                continue;
            };
            let key = key.to_ascii_lowercase();
            if !matches!(key.as_str(), "latitude" | "longitude" | "timezone") {
                continue;
            }
            let value = fields
                .next()
                .ok_or_else(|| Error::invalid_parameter(key.clone(), ""))?;

            match key.as_str() {
                "latitude" => latitude = Some(parse_degrees(&key, value)?),
                "longitude" => longitude = Some(parse_degrees(&key, value)?),
                "timezone" => {
                    timezone = Some(
                        value
                            .parse::<Tz>()
                            .map_err(|_| Error::unknown_timezone(value))?,
                    );
                }
                _ => unreachable!("key already filtered"),
            }
        }

        let latitude = latitude.ok_or_else(|| Error::missing_parameter("latitude"))?;
        let longitude = longitude.ok_or_else(|| Error::missing_parameter("longitude"))?;
        let timezone = timezone.ok_or_else(|| Error::missing_parameter("timezone"))?;
        check_coordinates(latitude, longitude)?;

        Ok(Self {
            latitude,
            longitude,
            timezone,
        })
    }

    /// Gets the observer latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the observer longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the IANA timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Resolves the UTC offset in decimal hours at a local instant.
    ///
    /// Daylight-saving transitions make this a function of the instant,
    /// not just the zone. An ambiguous local time (clocks rolled back)
    /// resolves to the earlier offset; a nonexistent one (clocks rolled
    /// forward past it) is an error.
    ///
    /// # Errors
    /// Returns `NonexistentLocalTime` if the instant falls into a
    /// daylight-saving gap.
    pub fn utc_offset_hours(&self, instant: &Instant) -> Result<f64> {
        let local = NaiveDate::from_ymd_opt(instant.year(), instant.month(), instant.day())
            .and_then(|date| date.and_hms_opt(instant.hour(), instant.minute(), 0))
            .ok_or_else(|| Error::computation_error("validated instant rejected by chrono"))?;

        let resolved = match self.timezone.from_local_datetime(&local) {
            LocalResult::Single(datetime) => datetime,
            LocalResult::Ambiguous(earlier, _) => earlier,
            LocalResult::None => {
                return Err(Error::nonexistent_local_time(
                    "the clock skips this time in the requested timezone",
                ))
            }
        };

        Ok(f64::from(resolved.offset().fix().local_minus_utc()) / 3600.0)
    }
}

fn parse_degrees(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::invalid_parameter(key, value))
}

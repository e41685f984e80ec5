//! # Sun and Twilight Times
//!
//! Closed-form computation of the sun's instantaneous position (azimuth,
//! height) and the eight clock times bounding astronomical, nautical, and
//! civil twilight plus sunrise/sunset, for a geographic location and local
//! date/time.
//!
//! The pipeline is a chain of pure functions:
//!
//! 1. calendar date/time → continuous day count since J2000.0 ([`Instant`])
//! 2. day count → equatorial sun coordinates ([`SolarEphemeris`])
//! 3. midnight day count + UTC hour → local hour angle of the vernal
//!    equinox ([`time::local_equinox_hour_angle`])
//! 4. ephemeris + hour angle + latitude → azimuth/height
//!    ([`position::horizontal_position`])
//! 5. ephemeris + latitude + threshold altitude → day-arc half-width
//!    ([`twilight::day_arc`]), with polar day/night detected through the
//!    inverse-cosine domain rather than computed
//! 6. half-widths + equation of time + longitude + timezone offset → local
//!    clock times ([`twilight::twilight_times`])
//!
//! The ephemeris is the standard low-precision solar approximation, valid
//! to about one arcminute for years from 2000 on. There is no state, no
//! I/O, and no concurrency in the computational core; the `sun` binary
//! layers argument parsing, the parameter file, and IANA timezone
//! resolution (via `chrono-tz`) on top.
//!
//! ## Quick start
//!
//! ```rust
//! use suntimes::{position, twilight, ephemeris, Instant, SiteParams};
//!
//! let params = SiteParams::parse(
//!     "latitude 52.516389\nlongitude 13.377778\ntimezone Europe/Berlin\n",
//! )?;
//! let instant = Instant::new(2020, 8, 21, 14, 47)?;
//! let offset = params.utc_offset_hours(&instant)?;
//!
//! let hours_utc = instant.hours_utc(offset);
//! let sun = suntimes::SolarEphemeris::from_day_count(instant.day_count(hours_utc));
//! let angle = suntimes::time::local_equinox_hour_angle(
//!     instant.day_count_midnight(),
//!     hours_utc,
//!     params.longitude(),
//! );
//!
//! let position = position::horizontal_position(&sun, angle, params.latitude())?;
//! assert!((position.azimuth() - 34.737951).abs() < 1e-5);
//!
//! let times = twilight::twilight_times(
//!     &sun,
//!     params.latitude(),
//!     ephemeris::equation_of_time_hours(instant.day_count(hours_utc), &sun),
//!     params.longitude(),
//!     offset,
//! )?;
//! assert_eq!(times.sunrise.morning().unwrap().to_string(), "05:55");
//! # Ok::<(), suntimes::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
    clippy::suboptimal_flops // Formulas stay in their published shape
)]

pub use crate::error::{Error, Result};
pub use crate::ephemeris::SolarEphemeris;
pub use crate::params::SiteParams;
pub use crate::position::HorizontalPosition;
pub use crate::time::Instant;
pub use crate::twilight::{ClockTime, CrossingTimes, DayArc, Threshold, TwilightTimes};

pub mod ephemeris;
pub mod error;
pub mod params;
pub mod position;
pub mod report;
pub mod time;
pub mod twilight;

mod math;

//! Horizontal coordinates of the sun for an observer.
//!
//! Projects the equatorial ephemeris into azimuth and height for a given
//! latitude and local hour angle of the vernal equinox, and attaches the
//! atmospheric refraction correction for the apparent height.

use crate::error::check_latitude;
use crate::math::{resolve_quadrant, wrap_to_half_turn};
use crate::{Error, Result, SolarEphemeris};

/// Instantaneous sun position in horizontal coordinates.
///
/// Azimuth uses this algorithm's south-referenced convention: 0° is due
/// south, positive towards west, wrapped into (-180°, 180°]. Heights are in
/// degrees above the horizon; `apparent_height` includes the refraction
/// correction at the fixed reference atmosphere (1010 mbar, 10 °C), which
/// lifts the sun by about half a degree near the horizon and by about one
/// arcminute at mid altitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    azimuth: f64,
    height: f64,
    apparent_height: f64,
}

impl HorizontalPosition {
    /// Gets the azimuth in degrees, south-referenced, in (-180°, 180°].
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the geometric height above the horizon in degrees.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Gets the refraction-corrected height in degrees.
    #[must_use]
    pub const fn apparent_height(&self) -> f64 {
        self.apparent_height
    }

    /// Checks if the sun is geometrically above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.height > 0.0
    }
}

/// Computes the sun's horizontal position for an observer.
///
/// `equinox_hour_angle` is the local hour angle of the vernal equinox in
/// degrees from the sidereal-time stage; subtracting the right ascension
/// yields the sun's local hour angle tau. The azimuth arctangent is
/// ambiguous by half a turn and is resolved with the sign of its
/// denominator, then wrapped into (-π, π].
///
/// # Errors
/// Returns `InvalidLatitude` for latitudes outside ±90°, or
/// `ComputationError` if the transform degenerates to a non-finite value
/// (exactly at the poles).
///
/// # Example
/// ```
/// use suntimes::{position::horizontal_position, SolarEphemeris};
///
/// // Berlin, 2020-08-21 12:47 UTC
/// let ephemeris = SolarEphemeris::from_day_count(7538.032638888889);
/// let position = horizontal_position(&ephemeris, 7735.4304624568795, 52.516389).unwrap();
/// assert!((position.azimuth() - 34.737951).abs() < 1e-5);
/// assert!((position.height() - 44.862865).abs() < 1e-5);
/// ```
pub fn horizontal_position(
    ephemeris: &SolarEphemeris,
    equinox_hour_angle: f64,
    latitude: f64,
) -> Result<HorizontalPosition> {
    check_latitude(latitude)?;

    let latitude_rad = latitude.to_radians();
    let declination = ephemeris.declination();
    let tau = equinox_hour_angle.to_radians() - ephemeris.right_ascension();

    let denominator = tau.cos() * latitude_rad.sin() - declination.tan() * latitude_rad.cos();
    let azimuth = wrap_to_half_turn(resolve_quadrant(
        (tau.sin() / denominator).atan(),
        denominator,
    ))
    .to_degrees();

    let height = (declination.cos() * tau.cos() * latitude_rad.cos()
        + declination.sin() * latitude_rad.sin())
    .asin()
    .to_degrees();

    if !azimuth.is_finite() || !height.is_finite() {
        return Err(Error::computation_error(
            "horizontal transform produced a non-finite angle",
        ));
    }

    Ok(HorizontalPosition {
        azimuth,
        height,
        apparent_height: height + refraction_arcmin(height) / 60.0,
    })
}

/// Atmospheric refraction in arcminutes for a geometric height in degrees.
///
/// Sæmundsson's formula at the reference atmosphere (1010 mbar, 10 °C).
#[must_use]
pub fn refraction_arcmin(height: f64) -> f64 {
    1.02 / (height + 10.3 / (height + 5.11)).to_radians().tan()
}

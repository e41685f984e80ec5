//! Plain-text report formatting.
//!
//! Renders the fixed 14-line output block: a header naming the local
//! instant and UTC offset, the site coordinates in degree/minute/second
//! notation, the instantaneous sun position, and the eight twilight and
//! sunrise/sunset clock times.

use core::fmt::Write as _;

use crate::twilight::{CrossingTimes, TwilightTimes};
use crate::{HorizontalPosition, Instant};

/// Label field width for the sun-angle and clock-time lines.
const LABEL_WIDTH: usize = 30;

/// Label field width for the site lines (latitude, longitude, timezone).
/// One wider than [`LABEL_WIDTH`]: their unsigned values line up with the
/// digits of the signed angles below, whose sign hangs in the extra column.
const SITE_LABEL_WIDTH: usize = 31;

/// Placeholder printed when the sun never crosses a threshold that day.
const NO_CROSSING: &str = "--:--";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats an angle as a signed degree/minute/second string.
///
/// Sign, zero-padded degrees, two-digit minutes, one-decimal seconds:
/// `+34° 44' 16.6"`.
#[must_use]
pub fn format_signed_dms(degrees: f64) -> String {
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = split_dms(degrees);
    format!("{sign}{d:02}\u{b0} {m:02}' {s:04.1}\"")
}

/// Formats a coordinate as degree/minute/second with a hemisphere letter.
///
/// `positive`/`negative` name the hemispheres, e.g. `'N'`/`'S'` for
/// latitude: `52° 30' 59.0" N`.
#[must_use]
pub fn format_hemisphere_dms(degrees: f64, positive: char, negative: char) -> String {
    let hemisphere = if degrees < 0.0 { negative } else { positive };
    let (d, m, s) = split_dms(degrees);
    format!("{d:02}\u{b0} {m:02}' {s:04.1}\" {hemisphere}")
}

/// Formats a decimal-hour UTC offset as `UTC+02:00` / `UTC-03:30`.
#[must_use]
pub fn format_utc_offset(offset_hours: f64) -> String {
    let total_minutes = (offset_hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { '-' } else { '+' };
    let magnitude = total_minutes.abs();
    format!("UTC{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
}

fn split_dms(degrees: f64) -> (u32, u32, f64) {
    let total = degrees.abs();
    let d = total.trunc();
    let rest_minutes = (total - d) * 60.0;
    let m = rest_minutes.trunc();
    (d as u32, m as u32, (rest_minutes - m) * 60.0)
}

fn morning_cell(times: &CrossingTimes) -> String {
    times
        .morning()
        .map_or_else(|| NO_CROSSING.to_string(), |t| t.to_string())
}

fn evening_cell(times: &CrossingTimes) -> String {
    times
        .evening()
        .map_or_else(|| NO_CROSSING.to_string(), |t| t.to_string())
}

/// Renders the complete report for one computed day.
///
/// The `Height:` line shows the geometric height; the refraction-corrected
/// value stays available through [`HorizontalPosition::apparent_height`].
#[must_use]
pub fn render(
    instant: &Instant,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    position: &HorizontalPosition,
    times: &TwilightTimes,
) -> String {
    let offset = format_utc_offset(utc_offset_hours);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Data for {} {} {}, {:02}:{:02} Local Time ({offset})",
        instant.day(),
        MONTH_NAMES[(instant.month() - 1) as usize],
        instant.year(),
        instant.hour(),
        instant.minute(),
    );

    {
        let mut site_line = |label: &str, value: String| {
            let _ = writeln!(out, "{label:<SITE_LABEL_WIDTH$}{value}");
        };
        site_line("Latitude:", format_hemisphere_dms(latitude, 'N', 'S'));
        site_line("Longitude:", format_hemisphere_dms(longitude, 'E', 'W'));
        site_line("Timezone:", offset);
    }

    let mut line = |label: &str, value: String| {
        let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
    };

    line("Azimuth:", format_signed_dms(position.azimuth()));
    line("Height:", format_signed_dms(position.height()));
    line(
        "Astronomical morning dawn at:",
        morning_cell(&times.astronomical),
    );
    line("Nautical morning dawn at:", morning_cell(&times.nautical));
    line("Civil morning dawn at:", morning_cell(&times.civil));
    line("Sunrise at:", morning_cell(&times.sunrise));
    line("Sunset at:", evening_cell(&times.sunrise));
    line("Civil evening dawn at:", evening_cell(&times.civil));
    line("Nautical evening dawn at:", evening_cell(&times.nautical));
    line(
        "Astronomical evening dawn at:",
        evening_cell(&times.astronomical),
    );

    out
}

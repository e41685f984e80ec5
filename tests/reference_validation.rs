//! End-to-end validation against the reference example: Berlin,
//! 2020-08-21 14:47 CEST. Every literal line of the report, including all
//! eight twilight/sunrise/sunset clock times, must be reproduced.

use suntimes::ephemeris::equation_of_time_hours;
use suntimes::position::horizontal_position;
use suntimes::time::local_equinox_hour_angle;
use suntimes::twilight::twilight_times;
use suntimes::{report, Instant, SiteParams, SolarEphemeris};

const BERLIN_PARAMS: &str = "latitude 52.516389\nlongitude 13.377778\ntimezone Europe/Berlin\n";

const EXPECTED_REPORT: &str = "\
Data for 21 August 2020, 14:47 Local Time (UTC+02:00)
Latitude:                      52\u{b0} 30' 59.0\" N
Longitude:                     13\u{b0} 22' 40.0\" E
Timezone:                      UTC+02:00
Azimuth:                      +34\u{b0} 44' 16.6\"
Height:                       +44\u{b0} 51' 46.3\"
Astronomical morning dawn at: 03:34
Nautical morning dawn at:     04:30
Civil morning dawn at:        05:17
Sunrise at:                   05:55
Sunset at:                    20:13
Civil evening dawn at:        20:51
Nautical evening dawn at:     21:38
Astronomical evening dawn at: 22:34
";

fn render_for(params_text: &str, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    let params = SiteParams::parse(params_text).unwrap();
    let instant = Instant::new(year, month, day, hour, minute).unwrap();
    let offset = params.utc_offset_hours(&instant).unwrap();

    let hours_utc = instant.hours_utc(offset);
    let day_count = instant.day_count(hours_utc);
    let sun = SolarEphemeris::from_day_count(day_count);
    let angle = local_equinox_hour_angle(instant.day_count_midnight(), hours_utc, params.longitude());

    let position = horizontal_position(&sun, angle, params.latitude()).unwrap();
    let times = twilight_times(
        &sun,
        params.latitude(),
        equation_of_time_hours(day_count, &sun),
        params.longitude(),
        offset,
    )
    .unwrap();

    report::render(
        &instant,
        params.latitude(),
        params.longitude(),
        offset,
        &position,
        &times,
    )
}

#[test]
fn reference_example_reproduces_every_line() {
    let rendered = render_for(BERLIN_PARAMS, 2020, 8, 21, 14, 47);
    assert_eq!(rendered, EXPECTED_REPORT);
}

#[test]
fn reference_example_line_by_line() {
    // On failure the full-string comparison is hard to read; this variant
    // pinpoints the first diverging line.
    let rendered = render_for(BERLIN_PARAMS, 2020, 8, 21, 14, 47);
    for (index, (got, want)) in rendered.lines().zip(EXPECTED_REPORT.lines()).enumerate() {
        assert_eq!(got, want, "line {}", index + 1);
    }
    assert_eq!(rendered.lines().count(), EXPECTED_REPORT.lines().count());
}

#[test]
fn parameter_order_does_not_matter() {
    let shuffled = "timezone Europe/Berlin\nlongitude 13.377778\nlatitude 52.516389\n";
    assert_eq!(
        render_for(shuffled, 2020, 8, 21, 14, 47),
        EXPECTED_REPORT
    );
}

#[test]
fn unknown_parameter_keys_are_ignored() {
    let with_extras = "station Berlin-Mitte\nlatitude 52.516389\nlongitude 13.377778\n\
                       elevation 34\ntimezone Europe/Berlin\n";
    assert_eq!(
        render_for(with_extras, 2020, 8, 21, 14, 47),
        EXPECTED_REPORT
    );
}

#[test]
fn winter_instant_resolves_standard_time() {
    let rendered = render_for(BERLIN_PARAMS, 2020, 12, 21, 12, 0);
    assert!(rendered.contains("(UTC+01:00)"));
    assert!(rendered.contains("Timezone:                      UTC+01:00"));
}

#[test]
fn equatorial_equinox_sunrise() {
    // At the equator on an equinox the day arc is almost exactly twelve
    // hours; with the equation of time this lands on 05:54 and 18:00.
    let params = "latitude 0.0\nlongitude 0.0\ntimezone UTC\n";
    let rendered = render_for(params, 2020, 3, 20, 12, 0);
    assert!(rendered.contains("Sunrise at:                   05:54"));
    assert!(rendered.contains("Sunset at:                    18:00"));
}

//! The `sun` command-line tool.
//!
//! ```text
//! sun <parameter-file> <day> <month> <year> <hour> <minute>
//! ```
//!
//! Reads the observer site from the parameter file, resolves the timezone
//! offset for the given local instant, runs the astronomical pipeline, and
//! prints the report to stdout. Usage mistakes exit with status 2, data
//! errors (file, range, timezone) with status 1.

use std::fmt::Display;
use std::process::ExitCode;
use std::str::FromStr;
use std::{env, fs};

use suntimes::ephemeris::equation_of_time_hours;
use suntimes::position::horizontal_position;
use suntimes::time::local_equinox_hour_angle;
use suntimes::twilight::twilight_times;
use suntimes::{report, Instant, SiteParams, SolarEphemeris};

const USAGE: &str = "Usage: sun <parameter-file> <day> <month> <year> <hour> <minute>";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&invocation) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("sun: {message}");
            ExitCode::from(1)
        }
    }
}

struct Invocation {
    parameter_file: String,
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
}

fn parse_args(args: &[String]) -> Option<Invocation> {
    let [file, day, month, year, hour, minute] = args else {
        return None;
    };
    Some(Invocation {
        parameter_file: file.clone(),
        day: parse_number(day)?,
        month: parse_number(month)?,
        year: parse_number(year)?,
        hour: parse_number(hour)?,
        minute: parse_number(minute)?,
    })
}

fn parse_number<T: FromStr>(slot: &str) -> Option<T> {
    slot.parse().ok()
}

fn run(invocation: &Invocation) -> Result<String, String> {
    let text = fs::read_to_string(&invocation.parameter_file)
        .map_err(|err| format!("{}: {err}", invocation.parameter_file))?;
    let params = SiteParams::parse(&text).map_err(display)?;

    let instant = Instant::new(
        invocation.year,
        invocation.month,
        invocation.day,
        invocation.hour,
        invocation.minute,
    )
    .map_err(display)?;
    let offset = params.utc_offset_hours(&instant).map_err(display)?;

    let hours_utc = instant.hours_utc(offset);
    let day_count = instant.day_count(hours_utc);
    let sun = SolarEphemeris::from_day_count(day_count);
    let angle = local_equinox_hour_angle(
        instant.day_count_midnight(),
        hours_utc,
        params.longitude(),
    );

    let position = horizontal_position(&sun, angle, params.latitude()).map_err(display)?;
    let times = twilight_times(
        &sun,
        params.latitude(),
        equation_of_time_hours(day_count, &sun),
        params.longitude(),
        offset,
    )
    .map_err(display)?;

    Ok(report::render(
        &instant,
        params.latitude(),
        params.longitude(),
        offset,
        &position,
        &times,
    ))
}

fn display(err: impl Display) -> String {
    err.to_string()
}

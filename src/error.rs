//! Error types for the sun/twilight calculator.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating inputs or running the pipeline.
///
/// Note that a sun that never crosses a twilight threshold on a given day is
/// *not* an error: the solver reports it as a polar day/night result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided, formatted for display.
        value: String,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided, formatted for display.
        value: String,
    },
    /// Date/time component outside calendar-valid bounds.
    InvalidInstant {
        /// Description of the violated constraint.
        message: &'static str,
    },
    /// A required key was absent from the parameter file.
    MissingParameter {
        /// The parameter key that was not found.
        key: &'static str,
    },
    /// A parameter file value could not be parsed.
    InvalidParameter {
        /// The parameter key whose value is malformed.
        key: String,
        /// The offending value (empty if the value was missing entirely).
        value: String,
    },
    /// The timezone identifier is not a known IANA name.
    UnknownTimezone {
        /// The unresolvable identifier.
        name: String,
    },
    /// The local date/time does not exist in the requested timezone
    /// (it falls into a daylight-saving gap).
    NonexistentLocalTime {
        /// Description of the gap.
        message: &'static str,
    },
    /// Numerical computation error (non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidInstant { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::MissingParameter { key } => {
                write!(f, "parameter file is missing the '{key}' key")
            }
            Self::InvalidParameter { key, value } => {
                if value.is_empty() {
                    write!(f, "parameter '{key}' has no value")
                } else {
                    write!(f, "parameter '{key}' has unparseable value '{value}'")
                }
            }
            Self::UnknownTimezone { name } => {
                write!(f, "unknown timezone identifier '{name}'")
            }
            Self::NonexistentLocalTime { message } => {
                write!(f, "local time does not exist: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude {
            value: value.to_string(),
        }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude {
            value: value.to_string(),
        }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_instant(message: &'static str) -> Self {
        Self::InvalidInstant { message }
    }

    /// Creates a missing parameter error.
    #[must_use]
    pub const fn missing_parameter(key: &'static str) -> Self {
        Self::MissingParameter { key }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown timezone error.
    #[must_use]
    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    /// Creates a nonexistent local time error.
    #[must_use]
    pub const fn nonexistent_local_time(message: &'static str) -> Self {
        Self::NonexistentLocalTime { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

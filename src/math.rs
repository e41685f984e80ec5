//! Mathematical utilities shared by the pipeline stages.

use core::f64::consts::PI;

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Resolves the π-ambiguity of a raw arctangent result.
///
/// `atan` is only unique modulo π: the same tangent value belongs to two
/// angles half a turn apart. The sign of the expression the tangent was
/// derived from (cos of the ecliptic longitude for right ascension, the
/// azimuth denominator for the horizontal transform) picks the half-plane.
#[inline]
pub fn resolve_quadrant(raw_angle: f64, disambiguating_sign: f64) -> f64 {
    if disambiguating_sign < 0.0 {
        raw_angle + PI
    } else {
        raw_angle
    }
}

/// Wraps an angle in radians into the half-open interval (-π, π].
pub fn wrap_to_half_turn(angle: f64) -> f64 {
    let mut wrapped = angle;
    while wrapped > PI {
        wrapped -= 2.0 * PI;
    }
    while wrapped <= -PI {
        wrapped += 2.0 * PI;
    }
    wrapped
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result.mul_add(x, coeff);
    }
    result
}

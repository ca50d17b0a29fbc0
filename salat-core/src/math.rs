//! Degree-based trigonometry and angle normalization.
//!
//! The solar model works in degrees throughout (Meeus publishes every
//! coefficient in degrees), so the trig wrappers here convert at the
//! boundary and the inverse functions hand back degrees.
//!
//! | Function | Input | Output range |
//! |----------|-------|--------------|
//! | [`unwind_angle`] | degrees | [0, 360) |
//! | [`quadrant_shift`] | degrees | [-180, 180] |
//! | [`positive_fmod`] | any | [0, modulus) |
//! | [`normalize_to_unit`] | day fraction | [0, 1) |
//!
//! The wrapping functions use `libm::fmod` rather than the `%` operator
//! because Rust's `%` is a remainder and keeps the sign of the dividend;
//! after `fmod` we adjust negative results into the target range.

use libm::fmod;

#[inline]
pub fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[inline]
pub fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[inline]
pub fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Inverse sine in degrees. NaN when `|x| > 1` (body never reaches the angle).
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Inverse cosine in degrees. NaN when `|x| > 1` (body never reaches the angle).
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

#[inline]
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Wraps an angle in degrees to [0, 360).
#[inline]
pub fn unwind_angle(x: f64) -> f64 {
    let w = fmod(x, 360.0);
    if w < 0.0 {
        w + 360.0
    } else {
        w
    }
}

/// Shifts an angle in degrees to the closest-to-zero equivalent, [-180, 180].
///
/// Used for local hour angles, where the discontinuity belongs at the
/// anti-meridian rather than at the meridian.
#[inline]
pub fn quadrant_shift(x: f64) -> f64 {
    x - 360.0 * (x / 360.0).round()
}

/// Mathematical modulo: the result carries the sign of the modulus.
#[inline]
pub fn positive_fmod(a: f64, b: f64) -> f64 {
    let r = fmod(a, b);
    if r < 0.0 {
        r + b
    } else {
        r
    }
}

/// Reduces a value to its fractional part in [0, 1).
///
/// Day fractions (transit positions) live on the unit interval.
#[inline]
pub fn normalize_to_unit(x: f64) -> f64 {
    x - x.floor()
}

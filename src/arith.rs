//! Scalar helpers used by the solver.

/// Raises `value` to a non-negative integer power by repeated multiplication.
///
/// The accumulator starts at one, so `integer_power(x, 0) == 1.0` for every
/// `x`, zero included.
pub fn integer_power(value: f64, exponent: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..exponent {
        acc *= value;
    }
    acc
}

/// Absolute value by comparison against zero.
///
/// `NaN` and `-0.0` compare false against `< 0.0` and are returned unchanged.
pub fn absolute_value(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

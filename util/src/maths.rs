//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Square a value.
pub fn sq<T>(value: T) -> T
where
    T: Float,
{
    value * value
}

/// Round a value to the given number of decimal places.
///
/// Halfway cases are rounded away from zero, as `Float::round` does.
pub fn round_dp<T>(value: T, decimal_places: i32) -> T
where
    T: Float,
{
    let scale = T::from(10).unwrap().powi(decimal_places);

    (value * scale).round() / scale
}

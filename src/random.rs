//! Generate random numbers.

/// Generate a random number between 0.0 and 1.0.
#[inline]
#[must_use]
pub fn random() -> f32 {
    fastrand::f32()
}

/// Generate a random number between the range.
///
/// # Arguments
///
/// * `min` - Start of the random value, must be smaller than `max`.
/// * `max` - End of the random value, must be bigger than `min`.
///
/// # Returns
///
/// - A random number between `min` and `max`.
#[inline]
#[must_use]
pub fn random_range(min: f32, max: f32) -> f32 {
    fastrand::f32().mul_add(max - min, min)
}

/// Generate a random number centered around zero.
///
/// # Returns
///
/// - A random number between `-spread / 2` and `spread / 2`.
#[inline]
#[must_use]
pub fn random_spread(spread: f32) -> f32 {
    (fastrand::f32() - 0.5) * spread
}

/// Like [`random_spread`] but never returns zero.
#[inline]
#[must_use]
pub fn random_spread_nonzero(spread: f32) -> f32 {
    let value = random_spread(spread);
    if value.abs() < f32::EPSILON {
        spread / 4.0
    } else {
        value
    }
}

/// Either `1.0` or `-1.0` with equal chance.
#[inline]
#[must_use]
pub fn random_sign() -> f32 {
    if fastrand::bool() {
        1.0
    } else {
        -1.0
    }
}

/// Pick a random index into a collection with `len` items.
///
/// # Panics
///
/// - When `len` is zero.
#[inline]
#[must_use]
pub fn random_index(len: usize) -> usize {
    fastrand::usize(..len)
}

//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Ties round away from zero, so `2.25` at one decimal becomes `2.3`.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return a plain ratio and guard division by zero.
#[must_use]
pub fn safe_ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Score shared-token overlap between two samples: `2 * shared / total`,
/// with the denominator floored at one so an empty pair stays finite.
///
/// This is the Dice/F1-style overlap coefficient, not strict Jaccard:
/// the denominator is the combined word count of both samples, not the
/// size of the token union.
#[must_use]
pub fn overlap_coefficient(shared: usize, total_tokens: usize) -> f64 {
    (2.0 * shared as f64) / total_tokens.max(1) as f64
}

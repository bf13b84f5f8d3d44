//! Entropy estimation.

use super::Selection;

/// Theoretical entropy of `password` in bits: `length * log2(pool_size)`.
///
/// The pool size is the sum of the enabled alphabet sizes, not the observed
/// character diversity of the password. That is the standard password-strength
/// convention: it measures the search space a uniform generator drew from, so
/// it is an upper bound rather than Shannon entropy of the realized string.
///
/// Returns 0.0 when no category is enabled.
pub fn entropy_bits(password: &str, selection: Selection) -> f64 {
    let pool = selection.pool_size();
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (pool as f64).log2()
}

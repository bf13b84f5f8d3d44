//! Password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::Selection;
use crate::error::GenerateError;

/// Minimum password length the core accepts. Callers may enforce a
/// stricter floor of their own.
pub const MIN_LENGTH: usize = 4;

/// Generate a password using the operating system's CSPRNG.
pub fn generate(length: usize, selection: Selection) -> Result<String, GenerateError> {
    generate_with(&mut OsRng, length, selection)
}

/// Generate a password from a caller-supplied random source.
///
/// One character is drawn from each enabled category's own alphabet, so the
/// output covers every enabled category regardless of length. The remaining
/// positions are drawn uniformly from the combined pool, then the whole
/// buffer is shuffled so the required characters are not anchored at fixed
/// positions.
///
/// The `CryptoRng` bound keeps statistical PRNGs out; tests inject a seeded
/// `ChaCha20Rng`.
pub fn generate_with<R>(
    rng: &mut R,
    length: usize,
    selection: Selection,
) -> Result<String, GenerateError>
where
    R: Rng + CryptoRng,
{
    if length < MIN_LENGTH {
        return Err(GenerateError::InvalidLength {
            min: MIN_LENGTH,
            got: length,
        });
    }
    if selection.is_empty() {
        return Err(GenerateError::NoCategorySelected);
    }

    let pool = selection.pool();
    let mut bytes = Vec::with_capacity(length);

    // Required set: one draw per enabled category. At most 4 categories and
    // length >= 4, so this never overshoots.
    for category in selection.enabled() {
        let alphabet = category.alphabet();
        bytes.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    while bytes.len() < length {
        bytes.push(pool[rng.gen_range(0..pool.len())]);
    }

    bytes.shuffle(rng);

    // Safety: alphabets are ASCII-only.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

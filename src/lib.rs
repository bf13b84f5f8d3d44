//! Password generation with guaranteed character-set coverage.
//!
//! Passwords are drawn from configurable character categories (lowercase,
//! uppercase, digits, symbols). Every enabled category contributes at least
//! one character to the output, and an entropy estimate in bits is available
//! for any password/selection pair. All randomness comes from a
//! cryptographically secure source.
//!
//! # Example
//!
//! ```rust
//! use genpass::{Selection, entropy_bits, generate};
//!
//! let selection = Selection::new(true, false, true, false); // lower + digits
//! let password = generate(12, selection).expect("valid request");
//!
//! assert_eq!(password.len(), 12);
//! println!("{} ({:.1} bits)", password, entropy_bits(&password, selection));
//! ```
//!
//! The random source is injectable for deterministic tests; see
//! [`generate_with`].

pub mod cli;
mod error;
mod pass;

pub use error::GenerateError;
pub use pass::{Category, MIN_LENGTH, Selection, entropy_bits, generate, generate_with};

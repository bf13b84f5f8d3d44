//! Password generation and entropy estimation.

mod category;
mod entropy;
mod generate;

pub use category::{Category, Selection};
pub use entropy::entropy_bits;
pub use generate::{MIN_LENGTH, generate, generate_with};

//! Command-line interface.

mod flags;
mod parse;
mod run;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};
pub use run::run;

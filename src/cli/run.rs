//! CLI run loop: apply flags, generate, print.

use zeroize::Zeroize;

use super::parse;
use crate::pass::{self, Selection};

const DEFAULT_LENGTH: usize = 16;
const DEFAULT_COUNT: usize = 1;

// Console policy, stricter than the core floor of 4.
const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 100;

/// Run the CLI. Returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("genpass: {}", e);
            return 2;
        }
    };

    if flags.help {
        print_help();
        return 0;
    }
    if flags.version {
        println!("genpass {}", env!("CARGO_PKG_VERSION"));
        return 0;
    }

    let length = flags.length.unwrap_or(DEFAULT_LENGTH);
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        eprintln!(
            "genpass: length must be between {} and {}",
            MIN_LENGTH, MAX_LENGTH
        );
        return 2;
    }

    let selection = Selection::new(
        !flags.no_lower,
        !flags.no_upper,
        !flags.no_digits,
        !flags.no_symbols,
    );

    for _ in 0..flags.number.unwrap_or(DEFAULT_COUNT) {
        let mut password = match pass::generate(length, selection) {
            Ok(password) => password,
            Err(e) => {
                eprintln!("genpass: {}", e);
                return 2;
            }
        };
        println!("{}", password);
        if flags.entropy {
            println!("  {:.1} bits", pass::entropy_bits(&password, selection));
        }
        password.zeroize();
    }

    0
}

fn print_help() {
    println!("genpass - password generator");
    println!();
    println!("Usage: genpass [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -l, --length <N>   Password length (default 16, range 8-100)");
    println!("  -n, --number <N>   Number of passwords to generate (default 1)");
    println!("  -e, --entropy      Print the entropy estimate for each password");
    println!("      --no-lower     Exclude lowercase letters");
    println!("      --no-upper     Exclude uppercase letters");
    println!("      --no-digits    Exclude digits");
    println!("      --no-symbols   Exclude symbols");
    println!("  -h, --help         Show this help");
    println!("  -v, --version      Show version");
    println!();
    println!("Every enabled character set contributes at least one character.");
}

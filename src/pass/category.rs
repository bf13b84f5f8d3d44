//! Character categories and pool construction.

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One class of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl Category {
    /// All categories in pool-concatenation order.
    pub const ALL: [Category; 4] = [
        Category::Lower,
        Category::Upper,
        Category::Digit,
        Category::Symbol,
    ];

    /// The fixed ASCII alphabet for this category.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Category::Lower => LOWER,
            Category::Upper => UPPER,
            Category::Digit => DIGITS,
            Category::Symbol => SYMBOLS,
        }
    }

    /// Whether `byte` belongs to this category's alphabet.
    pub fn contains(self, byte: u8) -> bool {
        self.alphabet().contains(&byte)
    }
}

/// Which categories are enabled for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Selection {
    pub const fn new(lower: bool, upper: bool, digits: bool, symbols: bool) -> Self {
        Self {
            lower,
            upper,
            digits,
            symbols,
        }
    }

    /// Enabled categories in the fixed order of [`Category::ALL`].
    pub fn enabled(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| match c {
            Category::Lower => self.lower,
            Category::Upper => self.upper,
            Category::Digit => self.digits,
            Category::Symbol => self.symbols,
        })
    }

    pub fn is_empty(self) -> bool {
        self.enabled().next().is_none()
    }

    /// Build the combined character pool. Concatenation order is fixed
    /// (lower, upper, digits, symbols) so the pool is deterministic.
    pub fn pool(self) -> Vec<u8> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for category in self.enabled() {
            pool.extend_from_slice(category.alphabet());
        }
        pool
    }

    /// Total size of the enabled alphabets (the entropy pool).
    pub fn pool_size(self) -> usize {
        self.enabled().map(|c| c.alphabet().len()).sum()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}

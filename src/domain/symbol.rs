use std::fmt;

/// Every value with a Roman symbol (or subtractive pair), in strictly
/// descending order.
///
/// Greedy descent over this table yields the canonical numeral for any value
/// in `1..=3999`.
pub const SYMBOL_TABLE: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// A single Roman numeral character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// One.
    I,
    /// Five.
    V,
    /// Ten.
    X,
    /// Fifty.
    L,
    /// One hundred.
    C,
    /// Five hundred.
    D,
    /// One thousand.
    M,
}

impl Symbol {
    /// All symbols, largest first.
    pub const ALL: [Self; 7] = [
        Self::M,
        Self::D,
        Self::C,
        Self::L,
        Self::X,
        Self::V,
        Self::I,
    ];

    /// Returns the value of the symbol on its own.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
            Self::L => 50,
            Self::C => 100,
            Self::D => 500,
            Self::M => 1000,
        }
    }

    /// Returns the character used to write the symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::V => 'V',
            Self::X => 'X',
            Self::L => 'L',
            Self::C => 'C',
            Self::D => 'D',
            Self::M => 'M',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = InvalidSymbolError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_char() == value)
            .ok_or(InvalidSymbolError(value))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a character is not one of `M D C L X V I`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid symbol '{0}': must be one of M, D, C, L, X, V, I")]
pub struct InvalidSymbolError(char);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        assert!(SYMBOL_TABLE.windows(2).all(|pair| pair[0].0 > pair[1].0));
    }

    #[test]
    fn table_entries_match_their_symbols() {
        for (value, text) in SYMBOL_TABLE {
            let symbols: Vec<Symbol> = text
                .chars()
                .map(|c| Symbol::try_from(c).unwrap())
                .collect();
            let expected = match symbols.as_slice() {
                [single] => single.value(),
                [smaller, larger] => larger.value() - smaller.value(),
                _ => panic!("unexpected table entry {text}"),
            };
            assert_eq!(value, expected, "{text}");
        }
    }

    #[test_case('M', Symbol::M, 1000)]
    #[test_case('D', Symbol::D, 500)]
    #[test_case('C', Symbol::C, 100)]
    #[test_case('L', Symbol::L, 50)]
    #[test_case('X', Symbol::X, 10)]
    #[test_case('V', Symbol::V, 5)]
    #[test_case('I', Symbol::I, 1)]
    fn symbol_from_char(c: char, expected: Symbol, value: u16) {
        let symbol = Symbol::try_from(c).unwrap();
        assert_eq!(symbol, expected);
        assert_eq!(symbol.value(), value);
        assert_eq!(symbol.to_string(), c.to_string());
    }

    #[test_case('i'; "lowercase")]
    #[test_case('A'; "other letter")]
    #[test_case('5'; "digit")]
    #[test_case(' '; "whitespace")]
    fn invalid_symbol(c: char) {
        assert_eq!(Symbol::try_from(c), Err(InvalidSymbolError(c)));
    }
}

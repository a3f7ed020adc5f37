//! Strict Roman numeral conversion
//!
//! Integers in `1..=3999` are encoded to their canonical Roman form, and
//! Roman numerals are decoded only if they are written in that canonical form.
//!
//! ```
//! assert_eq!(roman::to_roman(1994).unwrap(), "MCMXCIV");
//! assert_eq!(roman::from_roman("MCMXCIV").unwrap(), 1994);
//! assert!(roman::from_roman("IIII").is_err());
//! ```

/// Conversions between integers and Roman numeral strings.
pub mod convert;
pub use convert::{from_roman, to_roman};

pub mod domain;
pub use domain::{Numeral, Symbol, is_valid, pattern};

/// Conversions accepting untyped input, such as deserialized JSON.
pub mod dynamic;

mod error;
pub use error::Error;

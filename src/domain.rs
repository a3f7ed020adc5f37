//! Domain models for Roman numerals.
//!
//! This module contains the symbol table shared by both conversion
//! directions, the grammar of canonical numerals, and the validated
//! [`Numeral`] type.

/// Validated Roman numeral values.
pub mod numeral;
pub use numeral::Numeral;

/// The grammar of well-formed Roman numerals.
pub mod pattern;
pub use pattern::{PATTERN, is_valid, pattern};

/// Roman symbols and their values.
pub mod symbol;
pub use symbol::{SYMBOL_TABLE, Symbol};

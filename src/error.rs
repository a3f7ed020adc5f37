/// Errors raised when a value cannot be converted.
///
/// Every variant is an input validation failure. Messages name the rejected
/// value and the rule it breaks.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input has the wrong type for the conversion.
    #[error("input needs to be of type {expected}, got {found}: {value}")]
    Type {
        /// The type the conversion accepts.
        expected: &'static str,
        /// The type that was provided.
        found: &'static str,
        /// The rejected input, rendered as JSON.
        value: String,
    },

    /// Zero has no Roman symbol.
    #[error("0 cannot be represented in roman numerals")]
    Zero,

    /// Negative numbers have no Roman representation.
    #[error("{0} is negative and cannot be represented in roman numerals")]
    Negative(String),

    /// Numbers from 4000 upwards have no standard Roman representation.
    #[error("{0} is bigger than 3,999 and cannot be represented in roman numerals")]
    OutOfRange(String),

    /// Fractions have no Roman representation.
    #[error("{0} is not a whole number and cannot be represented in roman numerals")]
    NonInteger(String),

    /// The string is not a Roman numeral in canonical form.
    #[error("'{0}' is not a valid roman numeral")]
    InvalidNumeral(String),
}

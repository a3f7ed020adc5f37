//! Untyped input, such as values read from JSON, has to be checked for type
//! and integrality before it can be converted. The checks run in a fixed
//! order, so a value breaking several rules always reports the same error:
//!
//! 1. [`Error::Type`]
//! 2. [`Error::Zero`]
//! 3. [`Error::Negative`]
//! 4. [`Error::OutOfRange`]
//! 5. [`Error::NonInteger`]

use serde_json::Value;
use tracing::instrument;

use crate::{Error, convert};

/// Converts a JSON value to a Roman numeral.
///
/// # Errors
///
/// Returns [`Error::Type`] if `arabic` is not a number, otherwise fails as
/// [`to_roman_f64`] does.
///
/// # Examples
///
/// ```
/// use roman::{Error, dynamic::to_roman_value};
/// use serde_json::json;
///
/// assert_eq!(to_roman_value(&json!(12)).unwrap(), "XII");
/// assert_eq!(
///     to_roman_value(&json!("12")),
///     Err(Error::Type {
///         expected: "number",
///         found: "string",
///         value: r#""12""#.to_string(),
///     })
/// );
/// ```
#[instrument(level = "trace", ret, err(level = "debug"))]
pub fn to_roman_value(arabic: &Value) -> Result<String, Error> {
    let Value::Number(number) = arabic else {
        return Err(type_error("number", arabic));
    };

    if let Some(integer) = number.as_i64() {
        return convert::to_roman(integer);
    }
    if let Some(unsigned) = number.as_u64() {
        return Err(Error::OutOfRange(unsigned.to_string()));
    }
    number.as_f64().map_or_else(
        || Err(Error::NonInteger(number.to_string())),
        to_roman_f64,
    )
}

/// Converts a floating point number to a Roman numeral.
///
/// Infinities count as negative or out of range; `NaN` is not a whole number.
///
/// # Errors
///
/// - [`Error::Zero`] if `arabic` is zero (of either sign)
/// - [`Error::Negative`] if `arabic` is below zero
/// - [`Error::OutOfRange`] if `arabic` is 4000 or more
/// - [`Error::NonInteger`] if `arabic` has a fractional part
///
/// # Examples
///
/// ```
/// use roman::{Error, dynamic::to_roman_f64};
///
/// assert_eq!(to_roman_f64(7.0).unwrap(), "VII");
/// assert_eq!(to_roman_f64(1.5), Err(Error::NonInteger("1.5".to_string())));
/// ```
#[instrument(level = "trace", ret, err(level = "debug"))]
pub fn to_roman_f64(arabic: f64) -> Result<String, Error> {
    convert::check_float(arabic).map(convert::encode)
}

/// Converts a JSON value holding a Roman numeral to an integer.
///
/// # Errors
///
/// Returns [`Error::Type`] if `roman` is not a string, and
/// [`Error::InvalidNumeral`] if it is not a canonical numeral.
#[instrument(level = "trace", ret, err(level = "debug"))]
pub fn from_roman_value(roman: &Value) -> Result<u16, Error> {
    match roman {
        Value::String(roman) => convert::from_roman(roman),
        other => Err(type_error("string", other)),
    }
}

fn type_error(expected: &'static str, value: &Value) -> Error {
    Error::Type {
        expected,
        found: type_name(value),
        value: value.to_string(),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

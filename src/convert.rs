use std::num::FpCategory;

use tracing::instrument;

use crate::{
    Error, Numeral,
    domain::{SYMBOL_TABLE, Symbol, is_valid},
};

/// Converts an integer to its canonical Roman numeral.
///
/// # Errors
///
/// Checked in this order:
/// - [`Error::Zero`] if `arabic` is 0
/// - [`Error::Negative`] if `arabic` is below 0
/// - [`Error::OutOfRange`] if `arabic` is 4000 or more
///
/// # Examples
///
/// ```
/// use roman::{Error, to_roman};
///
/// assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
/// assert_eq!(to_roman(0), Err(Error::Zero));
/// ```
#[instrument(level = "trace", ret, err(level = "debug"))]
pub fn to_roman(arabic: i64) -> Result<String, Error> {
    check_range(arabic).map(encode)
}

/// Converts a canonical Roman numeral to an integer.
///
/// # Errors
///
/// Returns [`Error::InvalidNumeral`] if `roman` does not match the numeral
/// grammar (see [`crate::pattern`]).
///
/// # Examples
///
/// ```
/// use roman::{Error, from_roman};
///
/// assert_eq!(from_roman("MMXXIV").unwrap(), 2024);
/// assert_eq!(
///     from_roman("VX"),
///     Err(Error::InvalidNumeral("VX".to_string()))
/// );
/// ```
#[instrument(level = "trace", ret, err(level = "debug"))]
pub fn from_roman(roman: &str) -> Result<u16, Error> {
    if !is_valid(roman) {
        return Err(Error::InvalidNumeral(roman.to_string()));
    }
    decode(roman)
}

/// Checks that `arabic` lies in `1..=3999`.
pub(crate) fn check_range(arabic: i64) -> Result<u16, Error> {
    if arabic == 0 {
        return Err(Error::Zero);
    }
    if arabic < 0 {
        return Err(Error::Negative(arabic.to_string()));
    }
    if arabic > i64::from(Numeral::MAX.value()) {
        return Err(Error::OutOfRange(arabic.to_string()));
    }
    u16::try_from(arabic).map_err(|_| Error::OutOfRange(arabic.to_string()))
}

/// Checks that `arabic` is a whole number in `1..=3999`.
///
/// Infinities count as negative or out of range; `NaN` is not a whole number.
pub(crate) fn check_float(arabic: f64) -> Result<u16, Error> {
    if arabic.classify() == FpCategory::Zero {
        return Err(Error::Zero);
    }
    if arabic < 0.0 {
        return Err(Error::Negative(arabic.to_string()));
    }
    if arabic >= 4000.0 {
        return Err(Error::OutOfRange(arabic.to_string()));
    }
    if arabic.fract().classify() != FpCategory::Zero {
        return Err(Error::NonInteger(arabic.to_string()));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = arabic as u16;
    Ok(whole)
}

/// Greedy descent over the symbol table.
///
/// `value` must already be in range.
#[must_use]
pub(crate) fn encode(value: u16) -> String {
    let mut roman = String::new();
    let mut remainder = value;

    for (amount, symbol) in SYMBOL_TABLE {
        while remainder >= amount {
            roman.push_str(symbol);
            remainder -= amount;
        }
    }

    debug_assert_eq!(remainder, 0);
    roman
}

/// Sums symbol values, subtracting any symbol followed by a larger one.
///
/// `roman` must already match the numeral grammar.
fn decode(roman: &str) -> Result<u16, Error> {
    let values = roman
        .chars()
        .map(|c| Symbol::try_from(c).map(Symbol::value))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::InvalidNumeral(roman.to_string()))?;

    let mut arabic: i32 = 0;
    for (index, &value) in values.iter().enumerate() {
        match values.get(index + 1) {
            Some(&next) if next > value => arabic -= i32::from(value),
            _ => arabic += i32::from(value),
        }
    }

    u16::try_from(arabic).map_err(|_| Error::InvalidNumeral(roman.to_string()))
}

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

use crate::{
    Error,
    convert::{check_float, check_range, encode, from_roman},
};

/// A number that has a Roman numeral representation.
///
/// The wrapped value always lies in `1..=3999`. A `Numeral` displays as its
/// canonical Roman form and parses from it.
///
/// With serde, a `Numeral` is written as its Roman form, and may be read from
/// either a Roman numeral string or a whole number. Rejected input reports the
/// same [`Error`] as the conversion functions.
///
/// # Examples
///
/// ```
/// use roman::Numeral;
///
/// let year: Numeral = "MCMLXXXIV".parse().unwrap();
/// assert_eq!(year.value(), 1984);
///
/// let next = Numeral::try_from(1985_u16).unwrap();
/// assert_eq!(next.to_string(), "MCMLXXXV");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Numeral(u16);

impl Numeral {
    /// The smallest representable value, `I`.
    pub const MIN: Self = Self(1);

    /// The largest representable value, `MMMCMXCIX`.
    pub const MAX: Self = Self(3999);

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Iterates over every representable numeral in ascending order.
    #[must_use]
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range(value).map(Self)
    }
}

impl TryFrom<u16> for Numeral {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        encode(numeral.0)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl FromStr for Numeral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_roman(s).map(Self)
    }
}

impl TryFrom<&str> for Numeral {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl<'de> Deserialize<'de> for Numeral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumeralVisitor)
    }
}

/// Reads a [`Numeral`] from a Roman numeral string or a number, keeping the
/// crate's validation errors.
struct NumeralVisitor;

impl Visitor<'_> for NumeralVisitor {
    type Value = Numeral;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a roman numeral or a whole number from 1 to 3999")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Numeral::try_from(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .map_or_else(
                |_| Err(Error::OutOfRange(value.to_string())),
                Numeral::try_from,
            )
            .map_err(E::custom)
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        check_float(value).map(Numeral).map_err(E::custom)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

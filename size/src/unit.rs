use std::fmt;

use crate::{bytes, gigabytes, kilobytes, megabytes, terabytes, Error};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl Unit {
    /// Largest first.
    pub(crate) const DESCENDING: [Unit; 5] = [
        Unit::Terabyte,
        Unit::Gigabyte,
        Unit::Megabyte,
        Unit::Kilobyte,
        Unit::Byte,
    ];

    pub const fn scale(self) -> u64 {
        self.apply(1)
    }

    /// Wraps on overflow.
    pub const fn apply(self, value: u64) -> u64 {
        match self {
            Unit::Byte => bytes(value),
            Unit::Kilobyte => kilobytes(value),
            Unit::Megabyte => megabytes(value),
            Unit::Gigabyte => gigabytes(value),
            Unit::Terabyte => terabytes(value),
        }
    }

    /// # Errors
    /// `Error::Overflow` if `value` scaled by this unit exceeds `u64::MAX`.
    pub fn checked_apply(self, value: u64) -> Result<u64, Error> {
        value
            .checked_mul(self.scale())
            .ok_or(Error::Overflow { value, unit: self })
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Byte => "B",
            Unit::Kilobyte => "KiB",
            Unit::Megabyte => "MiB",
            Unit::Gigabyte => "GiB",
            Unit::Terabyte => "TiB",
        }
    }

    /// Inverse of [`Unit::symbol`].
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        Unit::DESCENDING
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

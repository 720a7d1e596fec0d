use std::{fmt, str::FromStr};

use human_size::{Byte, SpecificSize};
use log::{trace, warn};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Unit};

// f64 of 2^64, the first value that no longer fits.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A quantity of bytes.
///
/// Constructors scale with wrapping arithmetic, like the free functions in
/// this crate. Parsing is strict: a value that does not fit or is not a whole
/// number of bytes is an error.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ByteSize(u64);

impl ByteSize {
    pub const fn b(bytes: u64) -> Self {
        Self(Unit::Byte.apply(bytes))
    }

    pub const fn kb(kb: u64) -> Self {
        Self(Unit::Kilobyte.apply(kb))
    }

    pub const fn mb(mb: u64) -> Self {
        Self(Unit::Megabyte.apply(mb))
    }

    pub const fn gb(gb: u64) -> Self {
        Self(Unit::Gigabyte.apply(gb))
    }

    pub const fn tb(tb: u64) -> Self {
        Self(Unit::Terabyte.apply(tb))
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The largest unit that divides this size exactly, and the count of it.
    pub fn split(self) -> (u64, Unit) {
        if self.0 == 0 {
            return (0, Unit::Byte);
        }
        Unit::DESCENDING
            .into_iter()
            .find(|unit| self.0 % unit.scale() == 0)
            .map(|unit| (self.0 / unit.scale(), unit))
            .unwrap_or((self.0, Unit::Byte))
    }

    /// A whole count followed by one of our binary units, scaled without
    /// going through `f64`. `None` when the input has any other shape.
    fn parse_exact(input: &str) -> Option<Result<Self, Error>> {
        let split = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        let (count, symbol) = input.split_at(split);
        let unit = Unit::from_symbol(symbol.trim())?;
        let count = count.parse::<u64>().ok()?;

        trace!("parsed {:?} as {} {}", input, count, unit);
        Some(unit.checked_apply(count).map(Self))
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = self.split();
        write!(f, "{count} {unit}")
    }
}

impl FromStr for ByteSize {
    type Err = Error;

    /// Accepts a bare byte count (`"4096"`) or a size with a multiple
    /// (`"4 KiB"`, `"10 kB"`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Ok(bytes) = input.parse::<u64>() {
            return Ok(Self(bytes));
        }
        if let Some(size) = Self::parse_exact(input) {
            return size;
        }

        let size = input.parse::<SpecificSize<Byte>>().map_err(|err| {
            warn!("rejecting size {:?}: {}", input, err);
            err
        })?;
        let bytes = size.value();
        trace!("parsed {:?} as {} bytes", input, bytes);

        if !(0.0..U64_LIMIT).contains(&bytes) {
            return Err(Error::OutOfRange(bytes));
        }
        if bytes.fract() != 0.0 {
            return Err(Error::Fractional(bytes));
        }

        Ok(Self(bytes as u64))
    }
}

impl Serialize for ByteSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Formats such as TOML stop at i64::MAX; the string form parses back exactly.
        if self.0 > i64::MAX as u64 {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ByteSizeVisitor)
    }
}

struct ByteSizeVisitor;

impl<'de> de::Visitor<'de> for ByteSizeVisitor {
    type Value = ByteSize;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a byte count or a size such as \"4 KiB\"")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ByteSize(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(ByteSize)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

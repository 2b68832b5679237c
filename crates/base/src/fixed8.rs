use std::fmt::{self, Display, Formatter};

use crate::encoding::{BinDecode, BinEncode, BinRead, BinWrite, DecodeError};

/// An amount with eight decimal places, stored as a u64 of base units
/// (1.0 == 10⁸ units). Serialized as a little-endian u64.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Fixed8(u64);

impl Fixed8 {
    /// Base units per whole unit.
    pub const SCALE: u64 = 100_000_000;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE);

    #[inline]
    pub const fn from_raw(units: u64) -> Self {
        Self(units)
    }

    /// Whole units, saturating at the u64 range.
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole.saturating_mul(Self::SCALE))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Display for Fixed8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:08}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl fmt::Debug for Fixed8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed8({self})")
    }
}

impl BinEncode for Fixed8 {
    fn bin_encode<W: BinWrite>(&self, writer: &mut W) {
        writer.write_u64(self.0);
    }
}

impl BinDecode for Fixed8 {
    fn bin_decode<R: BinRead>(reader: &mut R) -> Result<Self, DecodeError> {
        Ok(Self(reader.read_u64()?))
    }
}

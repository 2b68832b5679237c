//! Fixed-width ledger identifiers.
//!
//! Both types hold their bytes in wire order. The conventional display
//! form is byte-reversed hex, and [`from_hex_str`](Hash256::from_hex_str)
//! parses that display form, so the reversal happens exactly once at the
//! string boundary.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::encoding::{
    base58check_decode, Base58CheckError, BinDecode, BinEncode, BinRead, BinWrite, DecodeError,
    ToBase58Check, ToRevHex,
};
use crate::hash::hash160;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address: decoded to {length} bytes, expected a 20-byte script hash")]
    InvalidLength { length: usize },

    #[error("address: version byte 0x{found:02X}, expected 0x{expected:02X}")]
    InvalidVersion { expected: u8, found: u8 },

    #[error("address: {0}")]
    Base58(#[from] Base58CheckError),
}

/// The ledger's address version byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressVersion(pub u8);

impl AddressVersion {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Version byte of standard ledger addresses.
    pub const LEDGER: Self = Self(0x17);
}

impl Default for AddressVersion {
    fn default() -> Self {
        Self::LEDGER
    }
}

macro_rules! hash_id {
    ($name:ident, $len:expr, $what:expr) => {
        #[doc = $what]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LENGTH: usize = $len;
            pub const ZERO: Self = Self([0u8; $len]);

            #[inline]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn from_slice(slice: &[u8]) -> Result<Self, DecodeError> {
                if slice.len() != $len {
                    return Err(DecodeError::LengthOutOfRange {
                        len: slice.len() as u64,
                        max: $len as u64,
                    });
                }
                let mut buf = [0u8; $len];
                buf.copy_from_slice(slice);
                Ok(Self(buf))
            }

            /// Parse the display form: big-endian hex, optionally 0x-prefixed,
            /// reversed into wire order.
            pub fn from_hex_str(value: &str) -> Result<Self, DecodeError> {
                let trimmed = value.trim();
                let digits = trimmed
                    .strip_prefix("0x")
                    .or_else(|| trimmed.strip_prefix("0X"))
                    .unwrap_or(trimmed);
                if digits.len() != $len * 2 {
                    return Err(DecodeError::LengthOutOfRange {
                        len: (digits.len() / 2) as u64,
                        max: $len as u64,
                    });
                }
                let bytes = hex::decode(digits)
                    .map_err(|_| DecodeError::InvalidValue(stringify!($name)))?;
                let mut buf = [0u8; $len];
                buf.copy_from_slice(&bytes);
                buf.reverse();
                Ok(Self(buf))
            }

            #[inline]
            pub fn to_array(self) -> [u8; $len] {
                self.0
            }

            #[inline]
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline]
            fn from(value: [u8; $len]) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.to_rev_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl FromStr for $name {
            type Err = DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex_str(s)
            }
        }

        impl BinEncode for $name {
            fn bin_encode<W: BinWrite>(&self, writer: &mut W) {
                writer.write_bytes(&self.0);
            }
        }

        impl BinDecode for $name {
            fn bin_decode<R: BinRead>(reader: &mut R) -> Result<Self, DecodeError> {
                let mut buf = [0u8; $len];
                reader.read_into(&mut buf)?;
                Ok(Self(buf))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::from_hex_str(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

hash_id!(Hash160, 20, "A 160-bit script hash.");
hash_id!(Hash256, 32, "A 256-bit identifier (transaction id, asset id).");

impl Hash160 {
    /// HASH160 of a verification script; the basis of an address.
    #[inline]
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    pub fn to_address(&self, version: AddressVersion) -> String {
        self.0.to_base58_check(version.0)
    }

    pub fn from_address(address: &str, version: AddressVersion) -> Result<Self, AddressError> {
        let (found, payload) = base58check_decode(address)?;
        if payload.len() != Self::LENGTH {
            return Err(AddressError::InvalidLength {
                length: payload.len(),
            });
        }
        if found != version.0 {
            return Err(AddressError::InvalidVersion {
                expected: version.0,
                found,
            });
        }
        let mut buf = [0u8; Self::LENGTH];
        buf.copy_from_slice(&payload);
        Ok(Self(buf))
    }
}

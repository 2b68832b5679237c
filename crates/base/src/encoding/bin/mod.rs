//! Binary wire codec: little-endian numeric fields, varint-prefixed
//! counts and lengths.

mod primitives;
mod reader;
mod traits;
mod varint;

pub use reader::SliceReader;
pub use traits::{BinDecode, BinEncode, BinRead, BinWrite};
pub use varint::{read_varint, var_size, write_varint};

/// Errors raised while decoding the binary wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("decode: unexpected end of input (needed {needed} bytes, {remaining} remaining)")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("decode: varint with tag 0x{0:02X} encodes a value that fits a shorter form")]
    NonCanonicalVarInt(u8),

    #[error("decode: length {len} exceeds maximum {max}")]
    LengthOutOfRange { len: u64, max: u64 },

    #[error("decode: invalid value for {0}")]
    InvalidValue(&'static str),
}

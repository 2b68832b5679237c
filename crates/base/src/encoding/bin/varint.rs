use super::{BinRead, BinWrite, DecodeError};

/// Encode `value` with the wire's variable-width integer layout: one byte
/// below 0xFD, otherwise a marker byte (0xFD/0xFE/0xFF) followed by a
/// little-endian u16/u32/u64.
pub fn write_varint<W: BinWrite + ?Sized>(writer: &mut W, value: u64) {
    if value < 0xFD {
        writer.write_bytes(&[value as u8]);
    } else if value <= 0xFFFF {
        writer.write_bytes(&[0xFD]);
        writer.write_bytes(&(value as u16).to_le_bytes());
    } else if value <= 0xFFFF_FFFF {
        writer.write_bytes(&[0xFE]);
        writer.write_bytes(&(value as u32).to_le_bytes());
    } else {
        writer.write_bytes(&[0xFF]);
        writer.write_bytes(&value.to_le_bytes());
    }
}

/// Decode a varint, rejecting non-minimal encodings so that every value
/// has exactly one wire form.
pub fn read_varint<R: BinRead + ?Sized>(reader: &mut R) -> Result<u64, DecodeError> {
    let tag = reader.read_u8()?;
    match tag {
        value @ 0x00..=0xFC => Ok(value as u64),
        0xFD => {
            let value = reader.read_u16()?;
            if value < 0xFD {
                Err(DecodeError::NonCanonicalVarInt(0xFD))
            } else {
                Ok(value as u64)
            }
        }
        0xFE => {
            let value = reader.read_u32()?;
            if value < 0x0001_0000 {
                Err(DecodeError::NonCanonicalVarInt(0xFE))
            } else {
                Ok(value as u64)
            }
        }
        0xFF => {
            let value = reader.read_u64()?;
            if value < 0x0000_0001_0000_0000 {
                Err(DecodeError::NonCanonicalVarInt(0xFF))
            } else {
                Ok(value)
            }
        }
    }
}

/// Encoded width of `value` as a varint.
pub const fn var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

use super::{BinDecode, BinEncode, BinRead, BinWrite, DecodeError};

impl BinEncode for bool {
    #[inline]
    fn bin_encode<W: BinWrite>(&self, writer: &mut W) {
        writer.write_u8(*self as u8);
    }
}

impl BinDecode for bool {
    #[inline]
    fn bin_decode<R: BinRead>(reader: &mut R) -> Result<Self, DecodeError> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::InvalidValue("bool")),
        }
    }
}

macro_rules! impl_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl BinEncode for $ty {
            #[inline]
            fn bin_encode<W: BinWrite>(&self, writer: &mut W) {
                writer.$write(*self);
            }
        }

        impl BinDecode for $ty {
            #[inline]
            fn bin_decode<R: BinRead>(reader: &mut R) -> Result<Self, DecodeError> {
                reader.$read()
            }
        }
    };
}

impl_int!(u8, write_u8, read_u8);
impl_int!(u16, write_u16, read_u16);
impl_int!(u32, write_u32, read_u32);
impl_int!(u64, write_u64, read_u64);

use std::string::String;

pub use hex::{FromHex, FromHexError};

/// Hex rendering in natural (wire) byte order.
pub trait ToHex {
    fn to_hex(&self) -> String;
}

impl<T: AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex(&self) -> String {
        hex::encode(self)
    }
}

/// Hex rendering in reversed byte order.
///
/// 32-byte identifiers travel the wire little-endian but are displayed
/// big-endian; this is the display side of that convention.
pub trait ToRevHex {
    fn to_rev_hex(&self) -> String;
}

impl<T: AsRef<[u8]>> ToRevHex for T {
    fn to_rev_hex(&self) -> String {
        let data = self.as_ref();
        let mut out = String::with_capacity(data.len() * 2);
        const TABLE: &[u8; 16] = b"0123456789abcdef";
        for b in data.iter().rev() {
            out.push(TABLE[(b >> 4) as usize] as char);
            out.push(TABLE[(b & 0x0F) as usize] as char);
        }
        out
    }
}

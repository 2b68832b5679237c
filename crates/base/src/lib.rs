//! Byte-level primitives shared across the Tessera SDK.
//!
//! Everything here is offline and synchronous: the binary wire codec
//! (little-endian fields, varint-prefixed counts), hex helpers with the
//! ledger's byte-order reversal convention, Base58Check, WIF, the hash
//! extension traits, and the fixed-width identifier types.

pub mod encoding;
pub mod fixed8;
pub mod hash;
pub mod ids;

pub use encoding::{
    base58check_decode, read_varint, var_size, wif_decode, wif_encode, write_varint,
    Base58CheckError, BinDecode, BinEncode, BinRead, BinWrite, DecodeError, SliceReader,
    ToBase58Check, ToHex, ToRevHex, Wif, WifDecodeError,
};
pub use fixed8::Fixed8;
pub use ids::{AddressError, AddressVersion, Hash160, Hash256};

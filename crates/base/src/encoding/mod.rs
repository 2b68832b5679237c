mod base58;
mod bin;
mod hex;
mod wif;

pub use base58::*;
pub use bin::*;
pub use hex::*;
pub use wif::*;

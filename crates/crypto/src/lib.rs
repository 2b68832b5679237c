//! P-256 key handling: WIF import/export, deterministic ECDSA, SEC1
//! point compression, and derivation of verification scripts and
//! Base58Check addresses.

mod error;
mod private_key;
mod public_key;

pub use error::KeyError;
pub use private_key::{PrivateKey, WIF_VERSION};
pub use public_key::PublicKey;

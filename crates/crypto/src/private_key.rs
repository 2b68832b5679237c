use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use p256::{FieldBytes, SecretKey};
use rand::rngs::OsRng;
use tessera_base::{wif_decode, wif_encode};

use crate::error::KeyError;
use crate::public_key::PublicKey;

/// WIF version byte for ledger private keys.
pub const WIF_VERSION: u8 = 0x80;

/// A P-256 signing key.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Generates a fresh key from the OS entropy source.
    pub fn generate() -> Self {
        Self {
            secret: SecretKey::random(&mut OsRng),
        }
    }

    /// Builds a key from a raw 32-byte big-endian scalar.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        let secret = SecretKey::from_bytes(FieldBytes::from_slice(bytes))
            .map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self { secret })
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret.to_bytes().into()
    }

    /// Parses a WIF string. Only the ledger's version byte is accepted;
    /// both compressed and legacy uncompressed encodings parse.
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let decoded = wif_decode(wif, 32)?;
        if decoded.version() != WIF_VERSION {
            return Err(KeyError::WifVersion(decoded.version()));
        }
        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(decoded.payload());
        Self::from_bytes(&scalar)
    }

    /// Encodes the key as WIF, always with the compressed-key marker.
    pub fn to_wif(&self) -> String {
        wif_encode(WIF_VERSION, &self.to_bytes(), true)
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self.secret.public_key())
    }

    /// Signs `message` with deterministic (RFC 6979) ECDSA over the
    /// SHA-256 digest, returning the raw 64-byte `r ‖ s` form.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let signer = SigningKey::from(&self.secret);
        let signature: Signature = signer.sign(message);
        let mut out = [0u8; 64];
        out.copy_from_slice(&signature.to_bytes());
        out
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

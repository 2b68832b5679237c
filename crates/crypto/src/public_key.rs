use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use tessera_base::{AddressVersion, Hash160};
use tessera_script::{OpCode, ScriptBuilder};

use crate::error::KeyError;

/// A P-256 verifying key with ledger address derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    point: p256::PublicKey,
}

impl PublicKey {
    /// Parses a SEC1 encoding, compressed (33 bytes) or uncompressed
    /// (65 bytes).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let point = p256::PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPoint)?;
        Ok(Self { point })
    }

    /// The 33-byte compressed SEC1 encoding.
    pub fn compress(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out.copy_from_slice(self.point.to_encoded_point(true).as_bytes());
        out
    }

    /// The 65-byte uncompressed SEC1 encoding.
    pub fn uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out.copy_from_slice(self.point.to_encoded_point(false).as_bytes());
        out
    }

    /// Verifies a raw 64-byte `r ‖ s` signature over the SHA-256 digest
    /// of `message`. Malformed signatures verify as false.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        VerifyingKey::from(&self.point)
            .verify(message, &signature)
            .is_ok()
    }

    /// The single-signature verification script: push the compressed
    /// key, CHECKSIG.
    pub fn verification_script(&self) -> Vec<u8> {
        let mut sb = ScriptBuilder::new();
        sb.push_bytes(&self.compress()).emit(OpCode::CHECKSIG);
        sb.into_bytes()
    }

    /// Hash of the verification script, which is the account id.
    pub fn script_hash(&self) -> Hash160 {
        Hash160::from_script(&self.verification_script())
    }

    pub fn address(&self) -> String {
        self.script_hash().to_address(AddressVersion::LEDGER)
    }
}

impl From<p256::PublicKey> for PublicKey {
    fn from(point: p256::PublicKey) -> Self {
        Self { point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::private_key::PrivateKey;
    use proptest::prelude::*;

    const WIF: &str = "L4RmQvd6PVzBTgYLpYagknNjhZxsHBbJq4ky7Zd3vB7AguSM7gF1";

    #[test]
    fn compress_decompress_round_trip() {
        let public = PrivateKey::from_wif(WIF).unwrap().public_key();
        let compressed = public.compress();
        assert!(compressed[0] == 0x02 || compressed[0] == 0x03);

        let again = PublicKey::from_sec1_bytes(&compressed).unwrap();
        assert_eq!(again, public);
        assert_eq!(again.uncompressed()[0], 0x04);
    }

    #[test]
    fn uncompressed_parses_too() {
        let public = PrivateKey::from_wif(WIF).unwrap().public_key();
        let again = PublicKey::from_sec1_bytes(&public.uncompressed()).unwrap();
        assert_eq!(again.compress(), public.compress());
    }

    #[test]
    fn off_curve_bytes_rejected() {
        // x = 2^256 - 1 exceeds the field modulus.
        let mut oversized_x = [0xFFu8; 33];
        oversized_x[0] = 0x02;
        assert_eq!(
            PublicKey::from_sec1_bytes(&oversized_x).unwrap_err(),
            KeyError::InvalidPoint
        );
        assert_eq!(
            PublicKey::from_sec1_bytes(&[]).unwrap_err(),
            KeyError::InvalidPoint
        );
    }

    #[test]
    fn sign_verify_round_trip() {
        let key = PrivateKey::from_wif(WIF).unwrap();
        let public = key.public_key();
        let msg = b"unsigned transaction bytes";
        let sig = key.sign(msg);

        assert!(public.verify(msg, &sig));

        let mut tampered = sig;
        tampered[10] ^= 0x01;
        assert!(!public.verify(msg, &tampered));
        assert!(!public.verify(b"other message", &sig));
        // Wrong length is false, not a panic.
        assert!(!public.verify(msg, &sig[..63]));
    }

    #[test]
    fn verification_script_layout() {
        let public = PrivateKey::from_wif(WIF).unwrap().public_key();
        let script = public.verification_script();
        assert_eq!(script.len(), 35);
        assert_eq!(script[0], 33);
        assert_eq!(&script[1..34], public.compress());
        assert_eq!(script[34], OpCode::CHECKSIG as u8);
    }

    proptest! {
        #[test]
        fn any_key_signs_verifiably(scalar in prop::array::uniform32(1u8..)) {
            let Ok(key) = PrivateKey::from_bytes(&scalar) else {
                return Ok(());
            };
            let sig = key.sign(&scalar);
            prop_assert!(key.public_key().verify(&scalar, &sig));
        }
    }
}

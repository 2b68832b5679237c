use ripemd::Ripemd160 as Ripemd160Hasher;
use sha2::{Digest, Sha256 as Sha256Hasher};

pub trait Sha256 {
    fn sha256(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]>> Sha256 for T {
    #[inline]
    fn sha256(&self) -> [u8; 32] {
        let mut h = Sha256Hasher::new();
        h.update(self);
        h.finalize().into()
    }
}

pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; 32];
}

impl<T: AsRef<[u8]>> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; 32] {
        self.sha256().sha256()
    }
}

pub trait Ripemd160 {
    fn ripemd160(&self) -> [u8; 20];
}

impl<T: AsRef<[u8]>> Ripemd160 for T {
    #[inline]
    fn ripemd160(&self) -> [u8; 20] {
        let mut h = Ripemd160Hasher::new();
        h.update(self);
        h.finalize().into()
    }
}

/// RIPEMD-160 over SHA-256; the script-hash digest behind every address.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    data.sha256().ripemd160()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_vector() {
        assert_eq!(
            hex::encode(b"".sha256()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn hash160_known_vector() {
        // RIPEMD160(SHA256("abc"))
        assert_eq!(
            hex::encode(hash160(b"abc")),
            "bb1be98c142444d7a56aa3981c3942a978e4dc33"
        );
    }

    #[test]
    fn double_sha_is_composition() {
        let data = b"tessera";
        assert_eq!(data.sha256_twice(), data.sha256().sha256());
    }
}

use crate::hash::Sha256Twice;

/// Errors raised while decoding a Base58Check string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base58CheckError {
    #[error("base58check: character '{0}' is not in the alphabet")]
    InvalidChar(char),

    #[error("base58check: decoded payload too short to carry a checksum")]
    InvalidLength,

    #[error("base58check: checksum mismatch")]
    InvalidChecksum,
}

/// Base58Check encoding with an explicit leading version byte.
///
/// The checksum is the first four bytes of double SHA-256 over
/// version‖payload. Leading zero bytes of that buffer survive as leading
/// `'1'` characters, which Base-58 alone cannot express.
pub trait ToBase58Check {
    fn to_base58_check(&self, version: u8) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self, version: u8) -> String {
        let payload = self.as_ref();
        let mut buf = Vec::with_capacity(1 + payload.len() + 4);

        buf.push(version);
        buf.extend_from_slice(payload);

        let check = buf.sha256_twice();
        buf.extend_from_slice(&check[..4]);

        bs58::encode(buf).into_string()
    }
}

/// Inverse of [`ToBase58Check::to_base58_check`]: yields the version byte
/// and the payload with the checksum verified and stripped.
pub fn base58check_decode(src: &str) -> Result<(u8, Vec<u8>), Base58CheckError> {
    use bs58::decode::Error;

    let decoded = bs58::decode(src).into_vec().map_err(|err| match err {
        Error::InvalidCharacter { character, .. } => Base58CheckError::InvalidChar(character),
        _ => Base58CheckError::InvalidLength,
    })?;

    // version byte + at least zero payload bytes + 4 checksum bytes
    if decoded.len() < 5 {
        return Err(Base58CheckError::InvalidLength);
    }

    let (body, check) = decoded.split_at(decoded.len() - 4);
    let sha = body.sha256_twice();
    if sha[..4] != *check {
        return Err(Base58CheckError::InvalidChecksum);
    }

    Ok((body[0], body[1..].to_vec()))
}

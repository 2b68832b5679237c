use super::base58::{base58check_decode, ToBase58Check};

/// A decoded Wallet Import Format string: version byte, payload, and an
/// optional 0x01 compression-flag suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wif {
    version: u8,
    compressed: bool,
    payload: Vec<u8>,
}

impl Wif {
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WifDecodeError {
    #[error("wif: not a valid base58check string")]
    InvalidBase58,

    #[error("wif: payload length {0} does not match the expected width")]
    InvalidLength(usize),

    #[error("wif: invalid compression flag 0x{0:02X}")]
    InvalidCompressionFlag(u8),
}

/// Base58Check of version‖payload with an optional 0x01 suffix marking
/// that the corresponding public key is stored compressed.
pub fn wif_encode(version: u8, payload: &[u8], compressed: bool) -> String {
    let mut buf = Vec::with_capacity(payload.len() + 1);
    buf.extend_from_slice(payload);
    if compressed {
        buf.push(0x01);
    }
    buf.to_base58_check(version)
}

/// Decode a WIF string whose payload is expected to be `payload_len`
/// bytes wide (32 for a private scalar).
pub fn wif_decode(src: &str, payload_len: usize) -> Result<Wif, WifDecodeError> {
    let (version, body) =
        base58check_decode(src).map_err(|_| WifDecodeError::InvalidBase58)?;

    if body.len() != payload_len && body.len() != payload_len + 1 {
        return Err(WifDecodeError::InvalidLength(body.len()));
    }

    let compressed = body.len() == payload_len + 1;
    if compressed && body[payload_len] != 0x01 {
        return Err(WifDecodeError::InvalidCompressionFlag(body[payload_len]));
    }

    Ok(Wif {
        version,
        compressed,
        payload: body[..payload_len].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_compressed_and_not() {
        let scalar = [0x11u8; 32];
        for compressed in [true, false] {
            let encoded = wif_encode(0x80, &scalar, compressed);
            let wif = wif_decode(&encoded, 32).unwrap();
            assert_eq!(wif.version(), 0x80);
            assert_eq!(wif.payload(), scalar);
            assert_eq!(wif.compressed(), compressed);
        }
    }

    #[test]
    fn wrong_width_rejected() {
        let encoded = wif_encode(0x80, &[0x22; 16], false);
        assert_eq!(wif_decode(&encoded, 32), Err(WifDecodeError::InvalidLength(16)));
    }

    #[test]
    fn bad_compression_flag_rejected() {
        let mut body = vec![0x33u8; 32];
        body.push(0x02); // not the 0x01 marker
        let encoded = body.to_base58_check(0x80);
        assert_eq!(
            wif_decode(&encoded, 32),
            Err(WifDecodeError::InvalidCompressionFlag(0x02))
        );
    }
}

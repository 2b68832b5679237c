use tessera_base::WifDecodeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("crypto: scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("crypto: bytes do not encode a point on the curve")]
    InvalidPoint,

    #[error("crypto: wrong WIF version byte {0:#04x}")]
    WifVersion(u8),

    #[error(transparent)]
    Wif(#[from] WifDecodeError),
}

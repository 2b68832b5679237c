use tessera_base::DecodeError;
use tessera_crypto::KeyError;
use tessera_script::ScriptError;

/// Errors from encoding, decoding or signing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxError {
    #[error("tx: unknown transaction kind {0:#04x}")]
    UnknownKind(u8),

    #[error("tx: unknown attribute usage {0:#04x}")]
    UnknownAttributeUsage(u8),

    #[error("tx: attribute usage {usage:#04x} wants {expected} data bytes, got {actual}")]
    AttributeLength {
        usage: u8,
        expected: usize,
        actual: usize,
    },

    #[error("tx: extension payload does not match the transaction kind")]
    ExtensionMismatch,

    #[error("tx: {0} trailing bytes after the transaction")]
    TrailingBytes(usize),

    #[error("tx: signature does not verify against the public key")]
    SignatureMismatch,

    #[error("tx: public key does not hash to the claimed address")]
    AddressMismatch,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors from assembling a transfer transaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("build: inputs hold {available} but {requested} is being spent")]
    InsufficientFunds { available: u64, requested: u64 },

    #[error(transparent)]
    Tx(#[from] TxError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Address(#[from] tessera_base::AddressError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

use tessera_base::{BinRead, BinWrite, Fixed8};

use crate::error::TxError;
use crate::tx::TxKind;

/// Upper bound on an invocation script, matching the VM's script cap.
const MAX_INVOCATION_SCRIPT: u64 = 65_536;

/// Kind-specific payload serialized between the version byte and the
/// attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxExtension {
    /// Contract transactions carry no extension payload.
    None,
    /// Invocation transactions carry the script to run and, from
    /// version 1 on, the gas budget.
    Invocation { script: Vec<u8>, gas: Fixed8 },
}

impl TxExtension {
    /// The transaction kind this payload belongs with.
    pub fn kind(&self) -> TxKind {
        match self {
            Self::None => TxKind::Contract,
            Self::Invocation { .. } => TxKind::Invocation,
        }
    }

    pub(crate) fn encode<W: BinWrite>(&self, w: &mut W, version: u8) {
        match self {
            Self::None => {}
            Self::Invocation { script, gas } => {
                w.write_var_bytes(script);
                if version >= 1 {
                    w.write_u64(gas.raw());
                }
            }
        }
    }

    pub(crate) fn decode<R: BinRead>(
        r: &mut R,
        kind: TxKind,
        version: u8,
    ) -> Result<Self, TxError> {
        match kind {
            TxKind::Contract => Ok(Self::None),
            TxKind::Invocation => {
                let script = r.read_var_bytes(MAX_INVOCATION_SCRIPT)?;
                let gas = if version >= 1 {
                    Fixed8::from_raw(r.read_u64()?)
                } else {
                    Fixed8::ZERO
                };
                Ok(Self::Invocation { script, gas })
            }
        }
    }
}

//! The transaction model and its wire codec.
//!
//! Layout: kind byte, version byte, kind-specific extension payload,
//! then varint-counted lists of attributes, inputs, outputs and
//! witnesses. Everything up to the witness list is the signing payload.

mod attribute;
mod extension;
mod witness;

pub use attribute::{AttributeUsage, TxAttribute};
pub use extension::TxExtension;
pub use witness::Witness;

use tessera_base::hash::Sha256Twice;
use tessera_base::{
    BinDecode, BinEncode, BinRead, BinWrite, Fixed8, Hash160, Hash256, SliceReader,
};
use tessera_crypto::PublicKey;
use tessera_script::ScriptBuilder;
use tracing::debug;

use crate::error::TxError;

/// Hard cap on any list length in a transaction.
const MAX_LIST_LEN: u64 = 0xFFFF;

/// Discriminant byte of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TxKind {
    /// Plain UTXO transfer.
    Contract = 0x80,
    /// Carries a script for the VM to run.
    Invocation = 0xD1,
}

impl TxKind {
    pub fn from_u8(byte: u8) -> Result<Self, TxError> {
        match byte {
            0x80 => Ok(Self::Contract),
            0xD1 => Ok(Self::Invocation),
            other => Err(TxError::UnknownKind(other)),
        }
    }
}

/// Reference to an unspent output being consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    pub prev_hash: Hash256,
    pub index: u16,
}

impl BinEncode for TxInput {
    fn bin_encode<W: BinWrite>(&self, w: &mut W) {
        self.prev_hash.bin_encode(w);
        w.write_u16(self.index);
    }
}

impl BinDecode for TxInput {
    fn bin_decode<R: BinRead>(r: &mut R) -> Result<Self, tessera_base::DecodeError> {
        Ok(Self {
            prev_hash: Hash256::bin_decode(r)?,
            index: r.read_u16()?,
        })
    }
}

/// A value being created, spendable by `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    pub asset: Hash256,
    pub value: Fixed8,
    pub to: Hash160,
}

impl BinEncode for TxOutput {
    fn bin_encode<W: BinWrite>(&self, w: &mut W) {
        self.asset.bin_encode(w);
        self.value.bin_encode(w);
        self.to.bin_encode(w);
    }
}

impl BinDecode for TxOutput {
    fn bin_decode<R: BinRead>(r: &mut R) -> Result<Self, tessera_base::DecodeError> {
        Ok(Self {
            asset: Hash256::bin_decode(r)?,
            value: Fixed8::bin_decode(r)?,
            to: Hash160::bin_decode(r)?,
        })
    }
}

/// A ledger transaction, signed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TxKind,
    pub version: u8,
    pub extension: TxExtension,
    pub attributes: Vec<TxAttribute>,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub witnesses: Vec<Witness>,
}

impl Transaction {
    /// An empty contract transaction.
    pub fn contract() -> Self {
        Self {
            kind: TxKind::Contract,
            version: 0,
            extension: TxExtension::None,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// An invocation transaction running `script` with the given gas
    /// budget. Version 1 so the gas field is serialized.
    pub fn invocation(script: Vec<u8>, gas: Fixed8) -> Self {
        Self {
            kind: TxKind::Invocation,
            version: 1,
            extension: TxExtension::Invocation { script, gas },
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// Serializes everything the signature covers: all fields except
    /// the witness list.
    pub fn encode_unsigned<W: BinWrite>(&self, w: &mut W) -> Result<(), TxError> {
        if self.extension.kind() != self.kind {
            return Err(TxError::ExtensionMismatch);
        }
        w.write_u8(self.kind as u8);
        w.write_u8(self.version);
        self.extension.encode(w, self.version);

        tessera_base::write_varint(w, self.attributes.len() as u64);
        for attr in &self.attributes {
            attr.encode(w)?;
        }
        tessera_base::write_varint(w, self.inputs.len() as u64);
        for input in &self.inputs {
            input.bin_encode(w);
        }
        tessera_base::write_varint(w, self.outputs.len() as u64);
        for output in &self.outputs {
            output.bin_encode(w);
        }
        Ok(())
    }

    /// The signing payload.
    pub fn unsigned_bytes(&self) -> Result<Vec<u8>, TxError> {
        let mut buf = Vec::new();
        self.encode_unsigned(&mut buf)?;
        Ok(buf)
    }

    pub fn encode<W: BinWrite>(&self, w: &mut W) -> Result<(), TxError> {
        self.encode_unsigned(w)?;
        tessera_base::write_varint(w, self.witnesses.len() as u64);
        for witness in &self.witnesses {
            witness.bin_encode(w);
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, TxError> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    pub fn decode<R: BinRead>(r: &mut R) -> Result<Self, TxError> {
        let kind = TxKind::from_u8(r.read_u8()?)?;
        let version = r.read_u8()?;
        let extension = TxExtension::decode(r, kind, version)?;

        let count = read_len(r)?;
        let mut attributes = Vec::with_capacity(count);
        for _ in 0..count {
            attributes.push(TxAttribute::decode(r)?);
        }

        let count = read_len(r)?;
        let mut inputs = Vec::with_capacity(count);
        for _ in 0..count {
            inputs.push(TxInput::bin_decode(r)?);
        }

        let count = read_len(r)?;
        let mut outputs = Vec::with_capacity(count);
        for _ in 0..count {
            outputs.push(TxOutput::bin_decode(r)?);
        }

        let count = read_len(r)?;
        let mut witnesses = Vec::with_capacity(count);
        for _ in 0..count {
            witnesses.push(Witness::bin_decode(r)?);
        }

        Ok(Self {
            kind,
            version,
            extension,
            attributes,
            inputs,
            outputs,
            witnesses,
        })
    }

    /// Decodes a full transaction and rejects any bytes past its end.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        let mut r = SliceReader::new(bytes);
        let tx = Self::decode(&mut r)?;
        if r.remaining() != 0 {
            return Err(TxError::TrailingBytes(r.remaining()));
        }
        Ok(tx)
    }

    /// The transaction id: double SHA-256 of the signing payload.
    pub fn hash(&self) -> Result<Hash256, TxError> {
        Ok(Hash256::new(self.unsigned_bytes()?.sha256_twice()))
    }

    /// Signs-by-attachment: verifies `signature` over the signing
    /// payload, checks the key really is `claimed_address`, and appends
    /// the standard single-signature witness. Returns false when a
    /// witness for that account is already attached.
    pub fn add_witness(
        &mut self,
        signature: &[u8; 64],
        public: &PublicKey,
        claimed_address: &str,
    ) -> Result<bool, TxError> {
        let payload = self.unsigned_bytes()?;
        if !public.verify(&payload, signature) {
            return Err(TxError::SignatureMismatch);
        }
        if public.address() != claimed_address {
            return Err(TxError::AddressMismatch);
        }

        let mut invocation = ScriptBuilder::new();
        invocation.push_bytes(signature);
        Ok(self.add_witness_script(public.verification_script(), invocation.into_bytes()))
    }

    /// Attaches a witness for an arbitrary verification script. Returns
    /// false if a witness with the same script hash is already present.
    pub fn add_witness_script(&mut self, verification: Vec<u8>, invocation: Vec<u8>) -> bool {
        let witness = Witness::new(invocation, verification);
        let account = witness.script_hash();
        if self.witnesses.iter().any(|w| w.script_hash() == account) {
            return false;
        }
        debug!(%account, total = self.witnesses.len() + 1, "witness attached");
        self.witnesses.push(witness);
        true
    }
}

fn read_len<R: BinRead>(r: &mut R) -> Result<usize, TxError> {
    let len = r.read_varint()?;
    if len > MAX_LIST_LEN {
        return Err(TxError::Decode(tessera_base::DecodeError::LengthOutOfRange {
            len,
            max: MAX_LIST_LEN,
        }));
    }
    Ok(len as usize)
}

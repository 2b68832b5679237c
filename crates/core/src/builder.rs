//! Assembles, signs and serializes transfer transactions from a set of
//! unspent outputs.

use tessera_base::{AddressVersion, Fixed8, Hash160, Hash256, ToHex};
use tessera_crypto::PrivateKey;
use tracing::info;

use crate::error::BuildError;
use crate::tx::{Transaction, TxAttribute, TxInput, TxOutput};

/// An unspent output the builder may consume. `txid` is the usual
/// display-order hex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtxoRef {
    pub txid: String,
    pub value: Fixed8,
    pub index: u16,
}

/// Script payload for an invocation transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationData {
    pub script: Vec<u8>,
    pub gas: Fixed8,
}

impl InvocationData {
    /// Wraps a script with the default gas budget of 1.0.
    pub fn new(script: Vec<u8>) -> Self {
        Self {
            script,
            gas: Fixed8::ONE,
        }
    }
}

/// Second authorizer of a transfer.
#[derive(Debug, Clone)]
pub enum CoSigner {
    /// A key that signs alongside the sender.
    Key(PrivateKey),
    /// Reserves the witness slot with an empty verification script so
    /// the real co-signature can be filled in out of band.
    Placeholder,
}

/// Everything needed to build one transfer.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    key: PrivateKey,
    asset: Hash256,
    to: String,
    value: Fixed8,
    utxos: Vec<UtxoRef>,
    attributes: Vec<TxAttribute>,
    invocation: Option<InvocationData>,
    co_signer: Option<CoSigner>,
}

/// A fully signed transfer, with both hex renderings callers submit or
/// archive.
#[derive(Debug, Clone)]
pub struct BuiltTx {
    pub tx: Transaction,
    pub unsigned_hex: String,
    pub raw_hex: String,
}

impl TransferRequest {
    pub fn new(key: PrivateKey, asset: Hash256, to: impl Into<String>, value: Fixed8) -> Self {
        Self {
            key,
            asset,
            to: to.into(),
            value,
            utxos: Vec::new(),
            attributes: Vec::new(),
            invocation: None,
            co_signer: None,
        }
    }

    pub fn utxo(mut self, utxo: UtxoRef) -> Self {
        self.utxos.push(utxo);
        self
    }

    /// Attaches an attribute. Attributes are part of the signing
    /// payload, so they have to be declared before `build`.
    pub fn attribute(mut self, attribute: TxAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn invocation(mut self, invocation: InvocationData) -> Self {
        self.invocation = Some(invocation);
        self
    }

    pub fn co_signer(mut self, co_signer: CoSigner) -> Self {
        self.co_signer = Some(co_signer);
        self
    }

    /// Builds and signs the transaction.
    ///
    /// Inputs are consumed in the order given. The destination output
    /// is emitted only for a positive value, and change goes back to
    /// the sender only when the inputs overshoot.
    pub fn build(self) -> Result<BuiltTx, BuildError> {
        let available = Fixed8::from_raw(
            self.utxos
                .iter()
                .fold(0u64, |acc, u| acc.saturating_add(u.value.raw())),
        );
        if available < self.value {
            return Err(BuildError::InsufficientFunds {
                available: available.raw(),
                requested: self.value.raw(),
            });
        }

        let mut tx = match self.invocation {
            Some(inv) => Transaction::invocation(inv.script, inv.gas),
            None => Transaction::contract(),
        };
        tx.attributes = self.attributes;

        for utxo in &self.utxos {
            tx.inputs.push(TxInput {
                prev_hash: Hash256::from_hex_str(&utxo.txid)?,
                index: utxo.index,
            });
        }

        let change_to = self.key.public_key().script_hash();
        if !self.value.is_zero() {
            tx.outputs.push(TxOutput {
                asset: self.asset,
                value: self.value,
                to: Hash160::from_address(&self.to, AddressVersion::LEDGER)?,
            });
        }
        // available >= value was checked above
        let change = available
            .checked_sub(self.value)
            .unwrap_or(Fixed8::ZERO);
        if !change.is_zero() {
            tx.outputs.push(TxOutput {
                asset: self.asset,
                value: change,
                to: change_to,
            });
        }

        let unsigned = tx.unsigned_bytes()?;

        // Co-signer witness slots precede the sender's.
        match self.co_signer {
            Some(CoSigner::Key(co_key)) => {
                let signature = co_key.sign(&unsigned);
                let public = co_key.public_key();
                tx.add_witness(&signature, &public, &public.address())?;
            }
            Some(CoSigner::Placeholder) => {
                tx.add_witness_script(Vec::new(), vec![0x00, 0x00]);
            }
            None => {}
        }

        let signature = self.key.sign(&unsigned);
        let public = self.key.public_key();
        tx.add_witness(&signature, &public, &public.address())?;

        let raw = tx.to_bytes()?;
        let txid = tx.hash()?;
        info!(
            %txid,
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            witnesses = tx.witnesses.len(),
            "transfer built"
        );

        Ok(BuiltTx {
            unsigned_hex: unsigned.to_hex(),
            raw_hex: raw.to_hex(),
            tx,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{AttributeUsage, TxExtension, TxKind};

    const WIF: &str = "L4RmQvd6PVzBTgYLpYagknNjhZxsHBbJq4ky7Zd3vB7AguSM7gF1";
    const DEST: &str = "AceQbAj2xuFLiH5hQAHMnV39wtmjUKiVRj";

    fn asset() -> Hash256 {
        Hash256::new([0x9B; 32])
    }

    fn utxo(value: u64) -> UtxoRef {
        UtxoRef {
            txid: "11".repeat(32),
            value: Fixed8::from_raw(value),
            index: 0,
        }
    }

    fn request(value: u64) -> TransferRequest {
        TransferRequest::new(
            PrivateKey::from_wif(WIF).unwrap(),
            asset(),
            DEST,
            Fixed8::from_raw(value),
        )
    }

    #[test]
    fn spend_with_change() {
        let built = request(100_000_000)
            .utxo(utxo(10_000_000_000))
            .build()
            .unwrap();
        let tx = &built.tx;

        assert_eq!(tx.kind, TxKind::Contract);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.outputs.len(), 2);
        assert_eq!(tx.outputs[0].value, Fixed8::from_raw(100_000_000));
        assert_eq!(
            tx.outputs[0].to,
            Hash160::from_address(DEST, AddressVersion::LEDGER).unwrap()
        );
        assert_eq!(tx.outputs[1].value, Fixed8::from_raw(9_900_000_000));
        assert_eq!(
            tx.outputs[1].to.to_address(AddressVersion::LEDGER),
            "ARbjp1wPh5XJchZpSjqHzGVQnnpTxNR1x7"
        );

        assert_eq!(tx.witnesses.len(), 1);
        assert!(tx.witnesses[0].is_standard());

        // The hex renderings decode back to the same transaction.
        let raw = hex::decode(&built.raw_hex).unwrap();
        assert_eq!(&Transaction::from_bytes(&raw).unwrap(), tx);
        assert!(built.raw_hex.starts_with(&built.unsigned_hex[..4]));
    }

    #[test]
    fn exact_spend_emits_no_change() {
        let built = request(100_000_000).utxo(utxo(100_000_000)).build().unwrap();
        assert_eq!(built.tx.outputs.len(), 1);
    }

    #[test]
    fn zero_value_emits_only_change() {
        let built = request(0).utxo(utxo(100_000_000)).build().unwrap();
        assert_eq!(built.tx.outputs.len(), 1);
        assert_eq!(built.tx.outputs[0].value, Fixed8::from_raw(100_000_000));
    }

    #[test]
    fn insufficient_funds_is_checked_before_building() {
        let err = request(200_000_000)
            .utxo(utxo(100_000_000))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::InsufficientFunds {
                available: 100_000_000,
                requested: 200_000_000
            }
        );
    }

    #[test]
    fn invocation_transfer_carries_script_and_default_gas() {
        let built = request(100_000_000)
            .utxo(utxo(10_000_000_000))
            .invocation(InvocationData::new(vec![0x51, 0x51]))
            .build()
            .unwrap();
        assert_eq!(built.tx.kind, TxKind::Invocation);
        assert_eq!(
            built.tx.extension,
            TxExtension::Invocation {
                script: vec![0x51, 0x51],
                gas: Fixed8::ONE
            }
        );
    }

    #[test]
    fn attributes_enter_the_signing_payload() {
        let built = request(100_000_000)
            .utxo(utxo(10_000_000_000))
            .attribute(TxAttribute::new(AttributeUsage::REMARK, b"memo".to_vec()))
            .build()
            .unwrap();
        assert_eq!(built.tx.attributes.len(), 1);

        // The attribute is covered by the signature and survives the wire.
        let raw = hex::decode(&built.raw_hex).unwrap();
        let back = Transaction::from_bytes(&raw).unwrap();
        assert_eq!(back.attributes, built.tx.attributes);
        assert!(built
            .unsigned_hex
            .contains(&hex::encode(b"memo")));
    }

    #[test]
    fn placeholder_co_signer_precedes_the_sender() {
        let built = request(100_000_000)
            .utxo(utxo(10_000_000_000))
            .co_signer(CoSigner::Placeholder)
            .build()
            .unwrap();
        let witnesses = &built.tx.witnesses;
        assert_eq!(witnesses.len(), 2);
        assert_eq!(witnesses[0].invocation, [0x00, 0x00]);
        assert!(witnesses[0].verification.is_empty());
        assert!(witnesses[1].is_standard());
    }

    #[test]
    fn key_co_signer_signs_the_same_payload() {
        let co_key = PrivateKey::generate();
        let built = request(100_000_000)
            .utxo(utxo(10_000_000_000))
            .co_signer(CoSigner::Key(co_key.clone()))
            .build()
            .unwrap();
        let witnesses = &built.tx.witnesses;
        assert_eq!(witnesses.len(), 2);
        assert!(witnesses[0].is_standard());
        assert!(witnesses[1].is_standard());
        assert_eq!(witnesses[0].address(), co_key.public_key().address());
    }

    #[test]
    fn bad_destination_address_rejected() {
        let err = TransferRequest::new(
            PrivateKey::from_wif(WIF).unwrap(),
            asset(),
            "definitely-not-an-address",
            Fixed8::from_raw(1),
        )
        .utxo(utxo(100_000_000))
        .build()
        .unwrap_err();
        assert!(matches!(err, BuildError::Address(_)));
    }
}

//! Transaction construction for the Tessera ledger: the wire codec,
//! witness assembly, and a builder that turns unspent outputs into a
//! signed transfer.
//!
//! Everything is offline; nothing here talks to a node.

pub mod builder;
pub mod error;
pub mod tx;

pub use builder::{BuiltTx, CoSigner, InvocationData, TransferRequest, UtxoRef};
pub use error::{BuildError, TxError};
pub use tx::{
    AttributeUsage, Transaction, TxAttribute, TxExtension, TxInput, TxKind, TxOutput, Witness,
};

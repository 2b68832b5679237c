//! Bytecode emission for the ledger's push-based script VM.
//!
//! [`ScriptBuilder`] is the low-level emitter; [`ContractParameter`]
//! and the helpers in [`invoke`] compile typed invocation arguments on
//! top of it.

mod builder;
mod error;
mod invoke;
mod op_code;
mod param;

pub use builder::ScriptBuilder;
pub use error::ScriptError;
pub use invoke::{invocation_script, transfer_script};
pub use op_code::OpCode;
pub use param::{literal_bytes, ContractParameter};

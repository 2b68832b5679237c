//! Typed contract-invocation parameters and their compilation to
//! bytecode.
//!
//! The argument shapes a contract call accepts form a closed union;
//! anything else is rejected when a parameter is constructed, not deep
//! inside emission. String arguments use the `"(tag)value"` literal
//! grammar to pick their byte encoding.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Zero;
use tessera_base::base58check_decode;

use crate::builder::ScriptBuilder;
use crate::error::ScriptError;
use crate::op_code::OpCode;

/// One argument of a contract invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    Bool(bool),
    Integer(BigInt),
    /// Tagged string literal, e.g. `"(address)ARbj…"`.
    Literal(String),
    List(Vec<ContractParameter>),
    /// Map arguments compile member-wise in key order, which keeps
    /// emitted bytecode deterministic per invocation.
    Map(BTreeMap<String, ContractParameter>),
}

impl ContractParameter {
    /// Builds a parameter from a JSON value, rejecting shapes the
    /// script compiler has no encoding for.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ScriptError> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(BigInt::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Integer(BigInt::from(u)))
                } else {
                    Err(ScriptError::UnsupportedParameter("non-integer number"))
                }
            }
            Value::String(s) => Ok(Self::Literal(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(members) => {
                let mut map = BTreeMap::new();
                for (key, member) in members {
                    map.insert(key.clone(), Self::from_json(member)?);
                }
                Ok(Self::Map(map))
            }
            Value::Null => Err(ScriptError::UnsupportedParameter("null")),
        }
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<Vec<ContractParameter>> for ContractParameter {
    fn from(value: Vec<ContractParameter>) -> Self {
        Self::List(value)
    }
}

/// Decodes a `"(tag)value"` literal into the bytes it pushes.
pub fn literal_bytes(literal: &str) -> Result<Vec<u8>, ScriptError> {
    let bad = || ScriptError::BadParameter(literal.to_owned());

    let rest = literal.strip_prefix('(').ok_or_else(bad)?;
    let close = rest.find(')').ok_or_else(bad)?;
    let (tag, value) = (&rest[..close], &rest[close + 1..]);

    let from_hex = |v: &str| hex::decode(v).map_err(|_| bad());
    let fixed_hex = |v: &str, width: usize| {
        let data = from_hex(v)?;
        if data.len() != width {
            return Err(bad());
        }
        Ok(data)
    };

    match tag {
        "str" | "string" => Ok(value.as_bytes().to_vec()),
        "bytes" | "[]" => from_hex(value),
        "address" | "addr" => {
            let (_, payload) = base58check_decode(value).map_err(|_| bad())?;
            if payload.len() != 20 {
                return Err(bad());
            }
            Ok(payload)
        }
        "integer" | "int" => {
            let number: BigInt = value.parse().map_err(|_| bad())?;
            if number.is_zero() {
                Ok(Vec::new())
            } else {
                Ok(number.to_signed_bytes_le())
            }
        }
        "hexinteger" | "hexint" | "hex" => from_hex(value),
        "hex256" | "int256" | "uint256" => fixed_hex(value, 32),
        "hex160" | "int160" | "uint160" => fixed_hex(value, 20),
        _ => Err(bad()),
    }
}

impl ScriptBuilder {
    /// Compiles one parameter onto the stack. Lists push their items in
    /// reverse order (so the callee pops them in declared order), then
    /// the count, then PACK when non-empty.
    pub fn push_param(&mut self, param: &ContractParameter) -> Result<&mut Self, ScriptError> {
        match param {
            ContractParameter::Bool(b) => {
                self.push_bool(*b);
            }
            ContractParameter::Integer(n) => {
                self.push_number(n);
            }
            ContractParameter::Literal(s) => {
                let bytes = literal_bytes(s)?;
                self.push_bytes(&bytes);
            }
            ContractParameter::List(items) => {
                for item in items.iter().rev() {
                    self.push_param(item)?;
                }
                self.push_int(items.len() as i64);
                if !items.is_empty() {
                    self.emit(OpCode::PACK);
                }
            }
            ContractParameter::Map(members) => {
                for member in members.values() {
                    self.push_param(member)?;
                }
            }
        }
        Ok(self)
    }
}

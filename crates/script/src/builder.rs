use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tessera_base::Hash160;

use crate::error::ScriptError;
use crate::op_code::OpCode;

/// Sequential emitter for the ledger's push-based bytecode.
///
/// Methods that cannot fail return `&mut Self` for chaining; the ones
/// with structural preconditions return `Result` instead of emitting a
/// corrupt stream.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.script
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    /// Emits a bare opcode.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Pushes arbitrary bytes: inline length byte up to 75 bytes,
    /// otherwise PUSHDATA1/2/4 with a 1/2/4-byte length prefix.
    pub fn push_bytes(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len <= OpCode::PUSHBYTES75 as usize {
            self.script.push(len as u8);
        } else if len <= 0xFF {
            self.emit(OpCode::PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= 0xFFFF {
            self.emit(OpCode::PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.emit(OpCode::PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Pushes an integer: single-opcode forms for -1, 0 and 1..=15,
    /// otherwise the minimal little-endian two's-complement bytes.
    pub fn push_number(&mut self, number: &BigInt) -> &mut Self {
        if let Some(small) = number.to_i64() {
            if small == -1 {
                return self.emit(OpCode::PUSHM1);
            }
            if small == 0 {
                return self.emit(OpCode::PUSH0);
            }
            if (1..=15).contains(&small) {
                self.script.push(OpCode::PUSH1 as u8 + (small as u8 - 1));
                return self;
            }
        }
        self.push_bytes(&number.to_signed_bytes_le())
    }

    pub fn push_int(&mut self, number: i64) -> &mut Self {
        self.push_number(&BigInt::from(number))
    }

    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit(OpCode::PUSH1)
        } else {
            self.emit(OpCode::PUSH0)
        }
    }

    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_bytes(value.as_bytes())
    }

    /// Invokes the contract behind `script_hash`; `tail_call` replaces
    /// the current frame instead of returning to it.
    pub fn app_call(&mut self, script_hash: &Hash160, tail_call: bool) -> &mut Self {
        let op = if tail_call {
            OpCode::TAILCALL
        } else {
            OpCode::APPCALL
        };
        self.emit(op);
        self.script.extend_from_slice(script_hash.as_bytes());
        self
    }

    /// Invokes a named system service. The identifier is length-prefixed
    /// with a single byte and must be 1..=252 bytes of UTF-8.
    pub fn sys_call(&mut self, api: &str) -> Result<&mut Self, ScriptError> {
        let bytes = api.as_bytes();
        if bytes.is_empty() || bytes.len() > 252 {
            return Err(ScriptError::SysCallLength(bytes.len()));
        }
        self.emit(OpCode::SYSCALL);
        self.script.push(bytes.len() as u8);
        self.script.extend_from_slice(bytes);
        Ok(self)
    }

    /// Emits a branch with a signed 16-bit little-endian offset; only
    /// valid for the jump/call opcodes.
    pub fn jump(&mut self, op: OpCode, offset: i16) -> Result<&mut Self, ScriptError> {
        if !op.is_branch() {
            return Err(ScriptError::NotABranch(op));
        }
        self.emit(op);
        self.script.extend_from_slice(&offset.to_le_bytes());
        Ok(self)
    }
}

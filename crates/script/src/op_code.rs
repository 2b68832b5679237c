//! The push-based stack machine's instruction set, limited to the
//! opcodes the SDK emits.

/// Opcodes of the ledger's script VM.
///
/// Byte values 0x01..=0x4B are implicit "push the next N bytes"
/// instructions and have no enum variant; [`PUSHBYTES75`](OpCode::PUSHBYTES75)
/// marks the upper bound of that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes an empty byte array (also the canonical false).
    PUSH0 = 0x00,
    /// Largest inline push: the next 75 bytes.
    PUSHBYTES75 = 0x4B,
    /// Push with a 1-byte length prefix.
    PUSHDATA1 = 0x4C,
    /// Push with a 2-byte length prefix.
    PUSHDATA2 = 0x4D,
    /// Push with a 4-byte length prefix.
    PUSHDATA4 = 0x4E,
    /// Pushes the integer -1.
    PUSHM1 = 0x4F,
    /// Pushes the integer 1 (also the canonical true).
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    NOP = 0x61,
    /// Unconditional jump, signed 16-bit offset.
    JMP = 0x62,
    JMPIF = 0x63,
    JMPIFNOT = 0x64,
    CALL = 0x65,
    RET = 0x66,
    /// Invoke the contract whose 20-byte script hash follows.
    APPCALL = 0x67,
    /// Invoke a named system service; length-prefixed identifier follows.
    SYSCALL = 0x68,
    /// APPCALL without returning to the caller.
    TAILCALL = 0x69,

    DUP = 0x76,

    /// Checks an ECDSA signature against a public key.
    CHECKSIG = 0xAC,

    /// Collapses the top n items into one array value.
    PACK = 0xC1,
}

impl OpCode {
    /// Whether this opcode takes a signed 16-bit branch offset.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            OpCode::JMP | OpCode::JMPIF | OpCode::JMPIFNOT | OpCode::CALL
        )
    }
}

impl From<OpCode> for u8 {
    #[inline]
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

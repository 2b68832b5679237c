use crate::op_code::OpCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("script: {0:?} is not a branch opcode")]
    NotABranch(OpCode),

    #[error("script: syscall identifier length {0} out of range (1..=252)")]
    SysCallLength(usize),

    #[error("script: malformed parameter literal: {0}")]
    BadParameter(String),

    #[error("script: unsupported parameter type: {0}")]
    UnsupportedParameter(&'static str),
}

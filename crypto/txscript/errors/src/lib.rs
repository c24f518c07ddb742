use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum TxScriptError {
    #[error("invalid opcode length: {0:02x?}")]
    MalformedPushSize(Vec<u8>),
    #[error("opcode requires {0} bytes, but script only has {1} remaining")]
    MalformedPush(usize, usize),
    #[error("invalid script hex: {0}")]
    InvalidHex(String),
    #[error("invalid script asm token '{0}'")]
    InvalidAsm(String),
    #[error("invalid script template '{0}'")]
    InvalidScriptTemplate(String),
}

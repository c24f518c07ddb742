use scriptkit_txscript::TxScriptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("invalid script '{0}': {1}")]
    InvalidScript(String, TxScriptError),

    #[error("unknown output format '{0}', expected 'text' or 'json'")]
    UnknownFormat(String),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Custom(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Custom(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// File: src/error.rs
use thiserror::Error;

/// Failures of the file and menu layers. The cipher itself never fails.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("frequency table '{0}' has no letters")]
    EmptyFrequencyTable(String),
    #[error("invalid key '{0}': expected an integer")]
    InvalidKey(String),
    #[error("enter a number from 1 to 5")]
    InvalidChoice(String),
    #[error("unexpected end of input")]
    EndOfInput,
}

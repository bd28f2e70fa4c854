//! The engine's single caller-facing error type.
//!
//! Asset failures never appear here: a broken image or background degrades to
//! a placeholder inside the composition pass. Callers see exactly one hard
//! failure mode, a missing or malformed record, plus internal assembly errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("missing document record: {0}")]
    MissingInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("pdf assembly error: {0}")]
    Pdf(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ComposeError {
    fn from(e: lopdf::Error) -> Self {
        ComposeError::Pdf(e.to_string())
    }
}

//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, locking
//! and quote file parsing, allowing crates to propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error while reading quotes from a seed file.
    #[error("Parse quotes file error: {0}")]
    ParseQuotesFile(String),

    /// Error indicating a poisoned lock was encountered.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::LockPoisoned(err.to_string())
    }
}

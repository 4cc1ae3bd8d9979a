//! Error types used across the Quote Client.
//!
//! Only two kinds come out of the network layer: a transport/decoding failure
//! and an application error reported by the server with a non-2xx status.
//! Both are turned into user-visible messages by [`crate::QuoteClient`].
use std::io;
use thiserror::Error;

/// Unified error type for the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout, DNS or JSON decoding failure.
    #[error("Network or parse failure: {0}")]
    NetworkOrParse(#[from] reqwest::Error),

    /// The server answered with a non-2xx status, optionally with an `error` text.
    #[error("Server responded with {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Application {
        /// Response status.
        status: reqwest::StatusCode,
        /// `error` field of the response body, when one could be decoded.
        message: Option<String>,
    },

    /// Terminal I/O error in the command-line front end.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Client-wide `Result` alias with `ClientError` as the default error.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

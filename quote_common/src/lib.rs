//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — JSON payloads exchanged over the `/api` endpoints.
//! - `api` — endpoint paths, default ports and URL helpers.
//! - `message` — style classes of user-facing messages.
#![warn(missing_docs)]
pub mod api;
pub mod error;
pub mod message;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use message::MessageKind;
pub use result::Result;

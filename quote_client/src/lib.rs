//! Quote Client library.
//!
//! Talks to a quote server over HTTP (`GET /api/quote`, `GET /api/quotes`,
//! `POST /api/quotes`) and renders the results into a [`Page`] of named display
//! regions. Every failure is degraded to a user-visible message; see
//! [`QuoteClient`] for the operations.
#![warn(missing_docs)]
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod prompt;
pub mod render;

pub use client::QuoteClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use page::{Page, PageState};

//! Quote API server.
//!
//! Serves an in-memory list of quotes over three endpoints:
//!
//! - `GET  /api/quote`  — one random quote with the current total.
//! - `GET  /api/quotes` — every quote, in insertion order.
//! - `POST /api/quotes` — append a quote given as `{"quote": "..."}`.
//!
//! Errors are answered as `{"error": "..."}` with a 4xx/5xx status (see `error`).
#![warn(missing_docs)]
use std::sync::Arc;

use tokio::net::TcpListener;

pub mod error;
pub mod model;
pub mod routes;

pub use error::ApiError;
pub use model::store::QuoteStore;
pub use routes::router;

/// Serves the API on `listener` until the future is dropped or the server fails.
pub async fn serve(listener: TcpListener, store: Arc<QuoteStore>) -> std::io::Result<()> {
    axum::serve(listener, router(store)).await
}

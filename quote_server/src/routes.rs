//! `/api` routes.
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use log::info;
use quote_common::api::{QUOTE_PATH, QUOTES_PATH};
use quote_common::quote::{CreatedQuote, QuoteEntry, QuoteList, RandomQuote};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::model::store::QuoteStore;

/// Returned when `quote` is missing, not a string or empty.
pub const QUOTE_REQUIRED: &str = "Quote text is required and cannot be empty";
/// Returned when the body is not JSON.
pub const INVALID_JSON: &str = "Invalid JSON in request body";
/// Returned by `GET /api/quote` on an empty store.
pub const NO_QUOTES: &str = "No quotes available";
/// Confirmation text of a created quote.
pub const QUOTE_CREATED: &str = "Quote added successfully";

/// Builds the application router.
pub fn router(store: Arc<QuoteStore>) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(random_quote))
        .route(QUOTES_PATH, get(list_quotes).post(add_quote))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// GET /api/quote
async fn random_quote(State(store): State<Arc<QuoteStore>>) -> Result<Json<RandomQuote>, ApiError> {
    let picked = store
        .random()?
        .ok_or_else(|| ApiError::NotFound(NO_QUOTES.to_string()))?;
    Ok(Json(RandomQuote {
        quote: picked.quote,
        total: picked.total as u64,
        id: Some(picked.id as u64),
    }))
}

/// GET /api/quotes
async fn list_quotes(State(store): State<Arc<QuoteStore>>) -> Result<Json<QuoteList>, ApiError> {
    let quotes: Vec<QuoteEntry> = store
        .all()?
        .into_iter()
        .enumerate()
        .map(|(id, quote)| QuoteEntry {
            id: Some(id as u64),
            quote,
        })
        .collect();
    Ok(Json(QuoteList {
        total: quotes.len() as u64,
        quotes,
    }))
}

/// POST /api/quotes
async fn add_quote(
    State(store): State<Arc<QuoteStore>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedQuote>), ApiError> {
    let Json(data) = payload.map_err(|_| ApiError::BadRequest(INVALID_JSON.to_string()))?;
    let quote = match data.get("quote").and_then(Value::as_str) {
        Some(quote) if !quote.is_empty() => quote.to_string(),
        _ => return Err(ApiError::BadRequest(QUOTE_REQUIRED.to_string())),
    };

    let id = store.add(quote.clone())?;
    info!("Quote #{} added", id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedQuote {
            id: id as u64,
            quote,
            message: QUOTE_CREATED.to_string(),
        }),
    ))
}

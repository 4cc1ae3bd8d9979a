use std::sync::Arc;

use quote_common::quote::{CreatedQuote, ErrorBody, QuoteList, RandomQuote};
use quote_server::QuoteStore;
use quote_server::model::store::DEFAULT_QUOTES;
use reqwest::StatusCode;
use serde_json::json;
use tokio::net::TcpListener;

/// Starts a server on an ephemeral port and returns its base URL.
async fn spawn_server(store: QuoteStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(quote_server::serve(listener, Arc::new(store)));
    format!("http://{}", addr)
}

#[tokio::test]
async fn random_quote_reports_total() {
    let base = spawn_server(QuoteStore::with_defaults()).await;
    let quote: RandomQuote = reqwest::get(format!("{}/api/quote", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(quote.total, DEFAULT_QUOTES.len() as u64);
    let id = quote.id.unwrap() as usize;
    assert_eq!(quote.quote, DEFAULT_QUOTES[id]);
}

#[tokio::test]
async fn empty_store_answers_not_found() {
    let base = spawn_server(QuoteStore::default()).await;
    let response = reqwest::get(format!("{}/api/quote", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "No quotes available");
}

#[tokio::test]
async fn posted_quote_is_listed_last() {
    let base = spawn_server(QuoteStore::new(vec!["first".into()])).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/api/quotes", base))
        .json(&json!({ "quote": "Hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CreatedQuote = response.json().await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.quote, "Hello");
    assert_eq!(created.message, "Quote added successfully");

    let list: QuoteList = http
        .get(format!("{}/api/quotes", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.quotes.len(), 2);
    assert_eq!(list.quotes[1].quote, "Hello");
    assert_eq!(list.quotes[1].id, Some(1));
}

#[tokio::test]
async fn empty_or_missing_quote_is_rejected() {
    let base = spawn_server(QuoteStore::with_defaults()).await;
    let http = reqwest::Client::new();

    for body in [json!({ "quote": "" }), json!({ "text": "Hello" }), json!({ "quote": 42 })] {
        let response = http
            .post(format!("{}/api/quotes", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, "Quote text is required and cannot be empty");
    }

    let list: QuoteList = http
        .get(format!("{}/api/quotes", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.total, DEFAULT_QUOTES.len() as u64);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let base = spawn_server(QuoteStore::with_defaults()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/quotes", base))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error, "Invalid JSON in request body");
}

//! HTTP transport for the quote API.
//!
//! `QuoteApi` issues the three requests the client needs and reports failures as
//! [`ClientError`]. It does not touch the page; rendering and error degradation
//! live in [`crate::QuoteClient`].
use log::{debug, info};
use quote_common::api::{QUOTE_PATH, QUOTES_PATH, endpoint};
use quote_common::quote::{ErrorBody, NewQuote, QuoteList, RandomQuote};
use reqwest::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Thin wrapper around a `reqwest::Client` bound to one quote server.
#[derive(Debug, Clone)]
pub struct QuoteApi {
    http: Client,
    base_url: String,
}

impl QuoteApi {
    /// Builds the HTTP client. Fails only if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// `GET /api/quote`.
    pub async fn random_quote(&self) -> Result<RandomQuote> {
        let url = endpoint(&self.base_url, QUOTE_PATH);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<RandomQuote>().await?)
    }

    /// `GET /api/quotes`.
    pub async fn all_quotes(&self) -> Result<QuoteList> {
        let url = endpoint(&self.base_url, QUOTES_PATH);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<QuoteList>().await?)
    }

    /// `POST /api/quotes` with a JSON body. The success body is ignored.
    pub async fn submit_quote(&self, text: &str) -> Result<()> {
        let url = endpoint(&self.base_url, QUOTES_PATH);
        let body = NewQuote {
            quote: text.to_string(),
        };
        info!("Submitting quote to {}", url);
        let response = self.http.post(&url).json(&body).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Passes 2xx responses through; otherwise reads the `error` field, if any.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty());
        Err(ClientError::Application { status, message })
    }
}

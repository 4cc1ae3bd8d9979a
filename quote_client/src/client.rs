//! The Quote Client: three request/response interactions rendered into a [`Page`].
//!
//! Every operation catches whatever the transport reports and degrades it to a
//! user-visible message. Nothing is retried and nothing propagates.
use std::time::Duration;

use log::{debug, error, warn};
use quote_common::MessageKind;

use crate::api::QuoteApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::page::Page;

/// Shown in `quote-text` when a random quote cannot be loaded.
pub const QUOTE_LOAD_ERROR: &str = "Error loading quote!";
/// Shown when the input is empty after trimming.
pub const EMPTY_INPUT: &str = "Please enter a quote";
/// Shown after a quote was accepted by the server.
pub const QUOTE_ADDED: &str = "Quote added successfully! 🎉";
/// Shown when the server rejects a quote without an `error` text.
pub const ADD_QUOTE_FALLBACK: &str = "Error adding quote";
/// Shown when a quote cannot be submitted at all.
pub const NETWORK_ERROR: &str = "Network error";
/// Shown when the quote list cannot be loaded.
pub const LIST_LOAD_ERROR: &str = "Error loading quotes";

/// Client bound to one server and one page.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    api: QuoteApi,
    page: Page,
    message_display: Duration,
}

impl QuoteClient {
    /// Creates a client rendering into a fresh page.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_page(config, Page::new())
    }

    /// Creates a client rendering into an existing page.
    pub fn with_page(config: ClientConfig, page: Page) -> Result<Self> {
        Ok(Self {
            api: QuoteApi::new(&config)?,
            page,
            message_display: config.message_display,
        })
    }

    /// The page this client renders into.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Loads a random quote into `quote-text` and `total-quotes`.
    ///
    /// On any failure only `quote-text` changes, to [`QUOTE_LOAD_ERROR`].
    pub async fn fetch_quote(&self) {
        match self.api.random_quote().await {
            Ok(quote) => {
                debug!("Received quote {:?} (total {})", quote.quote, quote.total);
                self.page.set_quote_text(&quote.quote);
                self.page.set_total(quote.total);
            }
            Err(e) => {
                self.page.set_quote_text(QUOTE_LOAD_ERROR);
                error!("Error: {}", e);
            }
        }
    }

    /// Submits the trimmed input field as a new quote.
    ///
    /// On success the input is cleared and the displayed quote is refreshed once.
    pub async fn add_quote(&self) {
        let input = self.page.input();
        let quote = input.trim();
        if quote.is_empty() {
            self.show_message(EMPTY_INPUT, MessageKind::Error);
            return;
        }

        match self.api.submit_quote(quote).await {
            Ok(()) => {
                self.show_message(QUOTE_ADDED, MessageKind::Success);
                self.page.clear_input();
                self.fetch_quote().await;
            }
            Err(ClientError::Application { status, message }) => {
                warn!("Quote rejected with {}: {:?}", status, message);
                let text = message.as_deref().unwrap_or(ADD_QUOTE_FALLBACK);
                self.show_message(text, MessageKind::Error);
            }
            Err(e) => {
                self.show_message(NETWORK_ERROR, MessageKind::Error);
                error!("Error: {}", e);
            }
        }
    }

    /// Writes every quote, numbered from 1, to the diagnostic console.
    pub async fn show_all_quotes(&self) {
        match self.api.all_quotes().await {
            Ok(list) => {
                self.page.console_log("=== All Quotes ===");
                for (index, item) in list.quotes.iter().enumerate() {
                    self.page.console_log(&format!("{}. {}", index + 1, item.quote));
                }
                self.page.console_log(&format!("Total: {} quotes", list.total));
                self.page.set_total(list.total);
                self.show_message(
                    &format!("Check the console log to see all {} quotes!", list.total),
                    MessageKind::Success,
                );
            }
            Err(e) => {
                self.show_message(LIST_LOAD_ERROR, MessageKind::Error);
                error!("Error: {}", e);
            }
        }
    }

    /// Shows a message and hides the region after the configured delay.
    ///
    /// The hide timer is detached and cannot be cancelled; a later message may
    /// therefore be hidden by an earlier timer. Must be called inside a tokio
    /// runtime.
    pub fn show_message(&self, text: &str, kind: MessageKind) {
        self.page.set_message(text, kind);
        let page = self.page.clone();
        let delay = self.message_display;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            page.hide_message();
        });
    }
}

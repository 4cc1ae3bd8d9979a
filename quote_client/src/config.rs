//! Client configuration.
use std::time::Duration;

use quote_common::api::DEFAULT_SERVER_URL;

/// How long a message stays visible before its region is hidden.
pub const MESSAGE_DISPLAY_MS: u64 = 3000;

/// Settings for [`crate::QuoteClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the quote server, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub request_timeout: Option<Duration>,
    /// Delay after which a shown message is hidden.
    pub message_display: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given server with default timings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets an optional per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: None,
            message_display: Duration::from_millis(MESSAGE_DISPLAY_MS),
        }
    }
}

//! Endpoint paths and networking defaults used by client and server.

/// Random quote endpoint (`GET`).
pub const QUOTE_PATH: &str = "/api/quote";
/// Quote collection endpoint (`GET` lists, `POST` appends).
pub const QUOTES_PATH: &str = "/api/quotes";
/// Port the quote server listens on by default.
pub const DEFAULT_PORT: u16 = 3000;
/// Base URL the client talks to when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Join a base URL and an endpoint path, tolerating a trailing slash on the base.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

//! JSON payloads exchanged over the quote API.
//!
//! Both sides use the same types: the server serializes them in its handlers and
//! the client decodes them with `reqwest`'s JSON support. Fields the client does
//! not need (such as `id`) are optional so that thinner servers still decode.
use serde::{Deserialize, Serialize};

/// Response of `GET /api/quote`: one random quote plus the collection size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomQuote {
    /// Quote text.
    pub quote: String,
    /// Number of quotes currently stored on the server.
    pub total: u64,
    /// Server-side index of the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// One element of a [`QuoteList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// Server-side index of the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Quote text.
    pub quote: String,
}

/// Response of `GET /api/quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteList {
    /// All quotes in insertion order.
    pub quotes: Vec<QuoteEntry>,
    /// Number of quotes, equal to `quotes.len()` on a well-behaved server.
    pub total: u64,
}

/// Request body of `POST /api/quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    /// Quote text to append.
    pub quote: String,
}

/// Response of a successful `POST /api/quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedQuote {
    /// Index assigned to the new quote.
    pub id: u64,
    /// Stored quote text.
    pub quote: String,
    /// Confirmation text.
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_quote_without_id_decodes() {
        let quote: RandomQuote = serde_json::from_str(r#"{"quote":"A","total":5}"#).unwrap();
        assert_eq!(quote.quote, "A");
        assert_eq!(quote.total, 5);
        assert_eq!(quote.id, None);
    }

    #[test]
    fn quote_list_tolerates_missing_ids() {
        let list: QuoteList =
            serde_json::from_str(r#"{"quotes":[{"quote":"x"},{"id":1,"quote":"y"}],"total":2}"#)
                .unwrap();
        assert_eq!(list.quotes.len(), 2);
        assert_eq!(list.quotes[1].id, Some(1));
    }

    #[test]
    fn new_quote_serializes_single_field() {
        let body = serde_json::to_string(&NewQuote { quote: "Hello".into() }).unwrap();
        assert_eq!(body, r#"{"quote":"Hello"}"#);
    }
}

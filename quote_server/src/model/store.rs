//! In-memory quote storage.
//!
//! Quotes are kept in insertion order; a quote's id is its index. The list only
//! grows, so ids stay stable for the lifetime of the process.
use std::sync::RwLock;

use quote_common::Result;
use rand::Rng;

/// Quotes the server starts with when no seed file is given.
pub const DEFAULT_QUOTES: [&str; 8] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Code is like humor. When you have to explain it, it's bad. - Cory House",
    "First, solve the problem. Then, write the code. - John Johnson",
    "Experience is the name everyone gives to their mistakes. - Oscar Wilde",
    "In order to be irreplaceable, one must always be different. - Coco Chanel",
    "The best error message is the one that never shows up. - Thomas Fuchs",
    "Simplicity is the soul of efficiency. - Austin Freeman",
    "Make it work, make it right, make it fast. - Kent Beck",
];

/// A quote picked by [`QuoteStore::random`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picked {
    /// Index of the quote.
    pub id: usize,
    /// Quote text.
    pub quote: String,
    /// Number of stored quotes at the time of the pick.
    pub total: usize,
}

/// Thread-safe list of quotes.
#[derive(Debug, Default)]
pub struct QuoteStore {
    quotes: RwLock<Vec<String>>,
}

impl QuoteStore {
    /// Creates a store holding `quotes`.
    pub fn new(quotes: Vec<String>) -> Self {
        Self {
            quotes: RwLock::new(quotes),
        }
    }

    /// Creates a store seeded with [`DEFAULT_QUOTES`].
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect())
    }

    /// Uniformly random quote, or `None` when the store is empty.
    pub fn random(&self) -> Result<Option<Picked>> {
        let quotes = self.quotes.read()?;
        if quotes.is_empty() {
            return Ok(None);
        }
        let id = rand::rng().random_range(0..quotes.len());
        Ok(Some(Picked {
            id,
            quote: quotes[id].clone(),
            total: quotes.len(),
        }))
    }

    /// Copy of all quotes in insertion order.
    pub fn all(&self) -> Result<Vec<String>> {
        Ok(self.quotes.read()?.clone())
    }

    /// Appends a quote and returns its id.
    pub fn add(&self, quote: String) -> Result<usize> {
        let mut quotes = self.quotes.write()?;
        quotes.push(quote);
        Ok(quotes.len() - 1)
    }

    /// Number of stored quotes.
    pub fn len(&self) -> Result<usize> {
        Ok(self.quotes.read()?.len())
    }

    /// `true` when no quotes are stored.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_seeded() {
        let store = QuoteStore::with_defaults();
        assert_eq!(store.len().unwrap(), DEFAULT_QUOTES.len());
        assert_eq!(store.all().unwrap()[7], DEFAULT_QUOTES[7]);
    }

    #[test]
    fn random_pick_is_consistent_with_contents() {
        let store = QuoteStore::with_defaults();
        for _ in 0..50 {
            let picked = store.random().unwrap().unwrap();
            assert_eq!(picked.total, DEFAULT_QUOTES.len());
            assert_eq!(picked.quote, DEFAULT_QUOTES[picked.id]);
        }
    }

    #[test]
    fn empty_store_has_nothing_to_pick() {
        let store = QuoteStore::default();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.random().unwrap(), None);
    }

    #[test]
    fn add_returns_sequential_ids() {
        let store = QuoteStore::new(vec!["a".into()]);
        assert_eq!(store.add("b".into()).unwrap(), 1);
        assert_eq!(store.add("c".into()).unwrap(), 2);
        assert_eq!(store.all().unwrap(), vec!["a", "b", "c"]);
    }
}

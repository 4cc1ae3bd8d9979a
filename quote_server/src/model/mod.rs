//! Domain models of the quote server:
//! - `store` — in-memory, lock-protected list of quotes.
//! - `seed` — reading the initial quotes from a text file.

pub mod seed;
pub mod store;

//! Quote server binary.
//!
//! Loads the initial quotes (built-in or from `--quotes-file`), binds
//! `--bind` (default `0.0.0.0:3000`) and serves the `/api` endpoints.
#![warn(missing_docs)]
mod args;

use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use quote_common::Result;
use quote_common::api::{QUOTE_PATH, QUOTES_PATH};
use quote_server::QuoteStore;
use quote_server::model::seed::{load_quotes, normalize_path};
use tokio::net::TcpListener;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let store = match &args.quotes_file {
        Some(raw) => {
            let path = normalize_path(raw);
            let quotes = load_quotes(&path)?;
            info!("Loaded {} quotes from {}", quotes.len(), path.display());
            QuoteStore::new(quotes)
        }
        None => QuoteStore::with_defaults(),
    };
    if store.is_empty()? {
        warn!("Quote store is empty; GET {} will answer 404", QUOTE_PATH);
    } else {
        info!("Serving {} quotes", store.len()?);
    }

    let listener = TcpListener::bind(args.bind).await?;
    let local_addr = listener.local_addr()?;
    info!("=== Quote Generator ===");
    info!("Server running on http://{}", local_addr);
    info!("API endpoints:");
    info!("  GET  {}   - Get random quote", QUOTE_PATH);
    info!("  GET  {}  - Get all quotes", QUOTES_PATH);
    info!("  POST {}  - Add new quote", QUOTES_PATH);

    quote_server::serve(listener, Arc::new(store)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

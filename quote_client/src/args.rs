//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use quote_common::api::DEFAULT_SERVER_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, env = "QUOTE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Optional per-request timeout in seconds. No timeout by default.
    #[clap(long)]
    pub request_timeout_secs: Option<u64>,

    /// What to do; defaults to the interactive prompt.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Client actions.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show one random quote.
    Quote,
    /// Submit a new quote.
    Add {
        /// Quote text; surrounding whitespace is trimmed.
        text: String,
    },
    /// Write all quotes to the console log.
    List,
    /// Load a quote, then read commands from stdin.
    Interactive,
}

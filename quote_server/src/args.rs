//! Command-line arguments for the quote server.
use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;
use quote_common::api::DEFAULT_PORT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[clap(long, env = "QUOTE_SERVER_BIND", default_value_t = default_bind())]
    pub bind: SocketAddr,

    /// Text file with one quote per line, replacing the built-in quotes.
    #[clap(long, env = "QUOTE_SEED_FILE")]
    pub quotes_file: Option<String>,
}

/// All interfaces on [`DEFAULT_PORT`].
fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

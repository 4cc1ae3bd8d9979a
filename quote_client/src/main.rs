//! Quote Client — a terminal front end for the quote API. It loads a random quote
//! on start, lets the user submit new quotes and lists every stored quote to the
//! console log.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://192.168.0.10:3000 add "Simplicity is the soul of efficiency."
//! quote_client list
//! quote_client            # interactive prompt
//! ```
#![warn(missing_docs)]
mod args;

use crate::args::{Args, Command};
use clap::Parser;
use log::{info, warn};
use quote_client::prompt::{Action, HELP, parse_action};
use quote_client::render::Renderer;
use quote_client::{ClientConfig, QuoteClient, Result};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let server_url = args.server_url.trim().replace('"', "");
    let config = ClientConfig::new(server_url)
        .with_request_timeout(args.request_timeout_secs.map(Duration::from_secs));
    info!("Using quote server at {}", config.base_url);
    let client = QuoteClient::new(config)?;
    let mut renderer = Renderer::new();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Quote => {
            client.fetch_quote().await;
            print_page(&client, &mut renderer);
        }
        Command::Add { text } => {
            client.page().set_input(&text);
            client.add_quote().await;
            print_page(&client, &mut renderer);
        }
        Command::List => {
            client.show_all_quotes().await;
            print_page(&client, &mut renderer);
        }
        Command::Interactive => run_prompt(&client, &mut renderer).await?,
    }
    Ok(())
}

/// Reads prompt lines until `quit`, end of input or Ctrl+C.
async fn run_prompt(client: &QuoteClient, renderer: &mut Renderer) -> Result<()> {
    client.fetch_quote().await;
    print_page(client, renderer);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received. Shutting down client...");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };

        match parse_action(&line) {
            Action::Next => client.fetch_quote().await,
            Action::Add(text) => {
                client.page().set_input(&text);
                client.add_quote().await;
            }
            Action::List => client.show_all_quotes().await,
            Action::Help => {
                println!("{}", HELP);
                continue;
            }
            Action::Quit => break,
            Action::Nothing => continue,
            Action::Unknown(word) => {
                warn!("Unknown command: {}", word);
                continue;
            }
        }
        print_page(client, renderer);
    }
    info!("Client stopped.");
    Ok(())
}

fn print_page(client: &QuoteClient, renderer: &mut Renderer) {
    print!("{}", renderer.render(&client.page().snapshot()));
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

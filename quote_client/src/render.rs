//! Plain-text rendering of the page for the terminal front end.
use std::fmt::Write;

use crate::page::PageState;

/// Renders page snapshots, printing each console line only once.
#[derive(Debug, Default)]
pub struct Renderer {
    console_seen: usize,
}

impl Renderer {
    /// Creates a renderer that has not printed any console line yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats console lines added since the previous call, then the visible regions.
    pub fn render(&mut self, state: &PageState) -> String {
        let mut out = String::new();
        for line in state.console.iter().skip(self.console_seen) {
            let _ = writeln!(out, "{}", line);
        }
        self.console_seen = state.console.len();

        let _ = writeln!(out, "\"{}\"", state.quote_text);
        match state.total_quotes {
            Some(total) => {
                let _ = writeln!(out, "Total quotes: {}", total);
            }
            None => out.push_str("Total quotes: -\n"),
        }
        if state.message.visible {
            if let Some(kind) = state.message.kind {
                let _ = writeln!(out, "[{}] {}", kind, state.message.text);
            }
        }
        out
    }
}

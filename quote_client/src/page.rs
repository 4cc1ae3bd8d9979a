//! Display regions the client renders into.
//!
//! A `Page` is a cheap, clonable handle over the current [`PageState`]. Every
//! write replaces a region wholesale, so concurrent operations simply follow a
//! last-write-wins rule. The lock is only held for the duration of a single
//! region update and never across an `.await`.
use std::sync::{Arc, Mutex, PoisonError};

use log::info;
use quote_common::MessageKind;

/// The `message` region: text, style class and visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRegion {
    /// Last message text.
    pub text: String,
    /// Style class; `None` until the first message is shown.
    pub kind: Option<MessageKind>,
    /// Whether the region is currently displayed.
    pub visible: bool,
}

/// Snapshot of every region of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// `quote-text` region.
    pub quote_text: String,
    /// `total-quotes` region; `None` until a total has been rendered.
    pub total_quotes: Option<u64>,
    /// `new-quote-input` field.
    pub new_quote_input: String,
    /// `message` region.
    pub message: MessageRegion,
    /// Diagnostic console lines, oldest first.
    pub console: Vec<String>,
}

/// Shared handle to the page regions.
#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Arc<Mutex<PageState>>,
}

impl Page {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Writes the `quote-text` region.
    pub fn set_quote_text(&self, text: &str) {
        self.with_state(|state| state.quote_text = text.to_string());
    }

    /// Writes the `total-quotes` region.
    pub fn set_total(&self, total: u64) {
        self.with_state(|state| state.total_quotes = Some(total));
    }

    /// Current raw value of the input field.
    pub fn input(&self) -> String {
        self.with_state(|state| state.new_quote_input.clone())
    }

    /// Replaces the input field value, as typing would.
    pub fn set_input(&self, value: &str) {
        self.with_state(|state| state.new_quote_input = value.to_string());
    }

    /// Empties the input field.
    pub fn clear_input(&self) {
        self.with_state(|state| state.new_quote_input.clear());
    }

    /// Writes text and style class into the `message` region and displays it.
    pub fn set_message(&self, text: &str, kind: MessageKind) {
        self.with_state(|state| {
            state.message = MessageRegion {
                text: text.to_string(),
                kind: Some(kind),
                visible: true,
            }
        });
    }

    /// Hides the `message` region. Idempotent.
    pub fn hide_message(&self) {
        self.with_state(|state| state.message.visible = false);
    }

    /// Appends a line to the diagnostic console and mirrors it to the logger.
    pub fn console_log(&self, line: &str) {
        info!(target: "console", "{}", line);
        self.with_state(|state| state.console.push(line.to_string()));
    }

    /// Copy of all regions.
    pub fn snapshot(&self) -> PageState {
        self.with_state(|state| state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_regions() {
        let page = Page::new();
        let other = page.clone();
        other.set_quote_text("shared");
        other.set_total(3);
        let state = page.snapshot();
        assert_eq!(state.quote_text, "shared");
        assert_eq!(state.total_quotes, Some(3));
    }

    #[test]
    fn message_overwrites_and_hides() {
        let page = Page::new();
        page.set_message("first", MessageKind::Success);
        page.set_message("second", MessageKind::Error);
        let message = page.snapshot().message;
        assert_eq!(message.text, "second");
        assert_eq!(message.kind, Some(MessageKind::Error));
        assert!(message.visible);

        page.hide_message();
        page.hide_message();
        let message = page.snapshot().message;
        assert!(!message.visible);
        assert_eq!(message.text, "second");
    }

    #[test]
    fn input_can_be_set_and_cleared() {
        let page = Page::new();
        page.set_input("  Hello  ");
        assert_eq!(page.input(), "  Hello  ");
        page.clear_input();
        assert!(page.input().is_empty());
    }

    #[test]
    fn console_appends_in_order() {
        let page = Page::new();
        page.console_log("1. a");
        page.console_log("2. b");
        assert_eq!(page.snapshot().console, vec!["1. a", "2. b"]);
    }
}

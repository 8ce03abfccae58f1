//! Inline dialog messages
//!
//! Messages are transient notices returned by button handlers and shown
//! beneath the dialog body until the user dismisses them.

use crate::tui::themes::Theme;
use ratatui::style::Style;
use std::sync::Arc;

/// Severity of an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageSeverity {
    #[default]
    Info,
    Error,
    Blocked,
    SevereWarning,
    Success,
    Warning,
}

impl MessageSeverity {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Error => "✖",
            Self::Blocked => "⊘",
            Self::SevereWarning => "‼",
            Self::Success => "✔",
            Self::Warning => "⚠",
        }
    }

    pub fn style(self, theme: &Theme) -> Style {
        let styles = theme.styles();
        match self {
            Self::Info => styles.message_info,
            Self::Error => styles.message_error,
            Self::Blocked => styles.message_blocked,
            Self::SevereWarning => styles.message_severe_warning,
            Self::Success => styles.message_success,
            Self::Warning => styles.message_warning,
        }
    }
}

/// An inline notice produced by a button handler
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub severity: MessageSeverity,
    pub text: String,
    pub style: Option<Style>,
}

impl Message {
    pub fn new(severity: MessageSeverity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            style: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Error, text)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Insertion-ordered list of shown messages.
///
/// Entries are compared by allocation, not by value, so two messages with
/// identical fields are dismissed independently.
#[derive(Debug, Default)]
pub struct MessageList {
    items: Vec<Arc<Message>>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return the handle used to dismiss it
    pub(super) fn push(&mut self, message: Message) -> Arc<Message> {
        let message = Arc::new(message);
        self.items.push(Arc::clone(&message));
        message
    }

    /// Remove the entry sharing `message`'s allocation. Returns `false` when
    /// it is not present.
    pub(super) fn dismiss(&mut self, message: &Arc<Message>) -> bool {
        match self.items.iter().position(|m| Arc::ptr_eq(m, message)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Message>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Message>> {
        self.items.iter()
    }
}

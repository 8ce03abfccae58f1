//! Dialog button descriptors
//!
//! A `DialogButton` declares a label, a visual kind and what activation
//! does: call a handler, follow a link, or nothing at all (in which case the
//! button is not rendered).

use super::message::Message;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::style::Style;
use std::fmt;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Visual variant of a button; behaviour does not depend on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    Primary,
    #[default]
    Default,
}

/// Input that activated a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Event passed to a button's activation handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Position of the button in the descriptor list
    pub index: usize,
    pub text: String,
    pub trigger: Trigger,
}

/// Activation handler; a returned message is shown inside the dialog
pub type ActivateHandler = Box<dyn FnMut(&ButtonEvent) -> Option<Message> + Send + Sync>;

/// What activating a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Invoke,
    Navigate,
    Hidden,
}

/// Declarative description of a dialog button
pub struct DialogButton {
    pub kind: ButtonKind,
    pub text: String,
    pub style: Option<Style>,
    pub on_activate: Option<ActivateHandler>,
    pub href: Option<String>,
    pub target: Option<String>,
}

impl DialogButton {
    pub fn new(kind: ButtonKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            style: None,
            on_activate: None,
            href: None,
            target: None,
        }
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(ButtonKind::Primary, text)
    }

    pub fn standard(text: impl Into<String>) -> Self {
        Self::new(ButtonKind::Default, text)
    }

    pub fn on_activate<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&ButtonEvent) -> Option<Message> + Send + Sync + 'static,
    {
        self.on_activate = Some(Box::new(handler));
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// A handler takes precedence over a link
    pub fn action(&self) -> ButtonAction {
        if self.on_activate.is_some() {
            ButtonAction::Invoke
        } else if self.href.is_some() {
            ButtonAction::Navigate
        } else {
            ButtonAction::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.action() != ButtonAction::Hidden
    }

    /// Columns taken by the rendered button, border and padding included
    pub fn display_width(&self) -> u16 {
        let label = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        label.saturating_add(4)
    }
}

impl fmt::Debug for DialogButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogButton")
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("style", &self.style)
            .field("on_activate", &self.on_activate.is_some())
            .field("href", &self.href)
            .field("target", &self.target)
            .finish()
    }
}

/// Opens the link behind a navigation button
pub trait Navigator: Send + Sync {
    fn navigate(&self, href: &str, target: Option<&str>) -> Result<()>;
}

/// Opens links in the system browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&self, href: &str, target: Option<&str>) -> Result<()> {
        // Terminals have no browsing context, so the target is informational only
        debug!(href, link_target = ?target, "Opening link");
        open::that(href)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_without_handler_or_link_is_hidden() {
        let button = DialogButton::primary("Decorative");
        assert_eq!(button.action(), ButtonAction::Hidden);
        assert!(!button.is_visible());
    }

    #[test]
    fn test_link_button_navigates() {
        let button = DialogButton::standard("Docs").with_href("https://example.com");
        assert_eq!(button.action(), ButtonAction::Navigate);
    }

    #[test]
    fn test_handler_wins_over_link() {
        let button = DialogButton::standard("Both")
            .with_href("https://example.com")
            .on_activate(|_| None);
        assert_eq!(button.action(), ButtonAction::Invoke);
    }

    #[test]
    fn test_display_width_counts_wide_characters() {
        assert_eq!(DialogButton::primary("Yes").display_width(), 7);
        assert_eq!(DialogButton::primary("はい").display_width(), 8);
    }
}

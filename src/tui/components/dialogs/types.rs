//! Core dialog types and traits
//!
//! This module defines the configuration shared by every dialog variant:
//! the caller-facing `BaseDialogProps`, the partial override records, and
//! the resolved `DialogFrame` produced by merging those overrides over the
//! internal defaults.

use crate::tui::components::Component;
use ratatui::{layout::Rect, style::Style, text::Text};
use serde::{Deserialize, Serialize};

/// Width of one terminal cell in logical pixels
pub const CELL_WIDTH_PX: u16 = 9;

/// Default minimum and maximum dialog width in logical pixels
pub const DEFAULT_DIALOG_WIDTH_PX: u16 = 450;

/// Default acknowledgement label
pub const DEFAULT_OKAY_TEXT: &str = "Okay";

/// Default confirm label
pub const DEFAULT_CONFIRM_TEXT: &str = "Yes";

/// Default reject label
pub const DEFAULT_REJECT_TEXT: &str = "No";

/// Body message of a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogContent {
    /// Plain text, wrapped to the dialog width
    Text(String),
    /// Pre-styled rich text
    Rich(Text<'static>),
}

impl DialogContent {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Rich(text) => text.lines.is_empty(),
        }
    }
}

impl Default for DialogContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for DialogContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DialogContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Text<'static>> for DialogContent {
    fn from(text: Text<'static>) -> Self {
        Self::Rich(text)
    }
}

/// Dialog header variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogType {
    #[default]
    Normal,
    /// Title drawn as a filled header bar
    LargeHeader,
    /// Title drawn with a close glyph
    Close,
}

/// Partial overrides for the dialog surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogOverrides {
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub style: Option<Style>,
}

/// Partial overrides for the dialog content header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentOverrides {
    pub dialog_type: Option<DialogType>,
    /// Always replaced by `BaseDialogProps::title` during resolution
    pub title: Option<String>,
    pub subtext: Option<String>,
    pub show_close_button: Option<bool>,
    pub style: Option<Style>,
}

/// Partial overrides for the modal layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalOverrides {
    pub is_blocking: Option<bool>,
    pub dark_overlay: Option<bool>,
    pub style: Option<Style>,
}

/// Configuration shared by every dialog variant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseDialogProps {
    pub title: Option<String>,
    pub message: DialogContent,
    pub dialog_overrides: Option<DialogOverrides>,
    pub content_overrides: Option<ContentOverrides>,
    pub modal_overrides: Option<ModalOverrides>,
}

impl BaseDialogProps {
    pub fn new(message: impl Into<DialogContent>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_dialog_overrides(mut self, overrides: DialogOverrides) -> Self {
        self.dialog_overrides = Some(overrides);
        self
    }

    pub fn with_content_overrides(mut self, overrides: ContentOverrides) -> Self {
        self.content_overrides = Some(overrides);
        self
    }

    pub fn with_modal_overrides(mut self, overrides: ModalOverrides) -> Self {
        self.modal_overrides = Some(overrides);
        self
    }
}

/// Resolved dialog surface settings
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSettings {
    pub min_width: u16,
    pub max_width: u16,
    pub style: Style,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_DIALOG_WIDTH_PX,
            max_width: DEFAULT_DIALOG_WIDTH_PX,
            style: Style::default(),
        }
    }
}

impl DialogSettings {
    fn apply(&mut self, overrides: &DialogOverrides) {
        if let Some(min_width) = overrides.min_width {
            self.min_width = min_width;
        }
        if let Some(max_width) = overrides.max_width {
            self.max_width = max_width;
        }
        if let Some(style) = overrides.style {
            self.style = style;
        }
    }
}

/// Resolved content header settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentSettings {
    pub dialog_type: DialogType,
    pub title: String,
    pub subtext: Option<String>,
    pub show_close_button: bool,
    pub style: Style,
}

impl ContentSettings {
    fn apply(&mut self, overrides: &ContentOverrides) {
        if let Some(dialog_type) = overrides.dialog_type {
            self.dialog_type = dialog_type;
        }
        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }
        if let Some(subtext) = &overrides.subtext {
            self.subtext = Some(subtext.clone());
        }
        if let Some(show_close_button) = overrides.show_close_button {
            self.show_close_button = show_close_button;
        }
        if let Some(style) = overrides.style {
            self.style = style;
        }
    }
}

/// Resolved modal layer settings
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSettings {
    pub is_blocking: bool,
    pub dark_overlay: bool,
    pub style: Style,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            is_blocking: true,
            dark_overlay: true,
            style: Style::default(),
        }
    }
}

impl ModalSettings {
    fn apply(&mut self, overrides: &ModalOverrides) {
        if let Some(is_blocking) = overrides.is_blocking {
            self.is_blocking = is_blocking;
        }
        if let Some(dark_overlay) = overrides.dark_overlay {
            self.dark_overlay = dark_overlay;
        }
        if let Some(style) = overrides.style {
            self.style = style;
        }
    }
}

/// Fully resolved dialog configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogFrame {
    pub dialog: DialogSettings,
    pub content: ContentSettings,
    pub modal: ModalSettings,
}

impl DialogFrame {
    /// Merge the caller's overrides over the internal defaults.
    ///
    /// Each override field replaces its default only when set. The title is
    /// written last from `props.title`, so it survives neither a
    /// `ContentOverrides::title` nor its own absence (which yields `""`).
    pub fn resolve(props: &BaseDialogProps) -> Self {
        let mut frame = Self::default();

        if let Some(overrides) = &props.dialog_overrides {
            frame.dialog.apply(overrides);
        }
        if let Some(overrides) = &props.content_overrides {
            frame.content.apply(overrides);
        }
        if let Some(overrides) = &props.modal_overrides {
            frame.modal.apply(overrides);
        }

        frame.content.title = props.title.clone().unwrap_or_default();
        frame
    }

    /// Whether the header shows a close glyph
    pub fn shows_close_glyph(&self) -> bool {
        self.content.show_close_button || self.content.dialog_type == DialogType::Close
    }
}

/// Result reported by a dialog through its `on_close` callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DialogOutcome {
    /// Alert acknowledged
    Acknowledge,
    /// Confirm answered: `true` confirmed, `false` rejected
    ConfirmReject(bool),
    /// Prompt answered: `Some(text)` accepted, `None` rejected
    PromptOrReject(Option<String>),
}

impl DialogOutcome {
    /// Whether the user accepted the dialog
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Acknowledge => true,
            Self::ConfirmReject(confirmed) => *confirmed,
            Self::PromptOrReject(value) => value.is_some(),
        }
    }
}

/// A mountable dialog
pub trait Dialog: Component {
    /// Resolved configuration the dialog renders with
    fn frame(&self) -> &DialogFrame;

    /// Check if the dialog blocks the surface behind it
    fn is_blocking(&self) -> bool {
        self.frame().modal.is_blocking
    }
}

/// Helper struct for dialog layout calculations
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLayout {
    /// Full available area
    pub available_area: Rect,
    /// Dialog area (including border)
    pub dialog_area: Rect,
    /// Content area (excluding border and padding)
    pub content_area: Rect,
}

impl DialogLayout {
    /// Horizontal padding inside the border, per side
    pub const PADDING_X: u16 = 1;

    pub fn calculate(settings: &DialogSettings, available_area: Rect, content_height: u16) -> Self {
        let width = Self::outer_width(settings, available_area);
        let height = content_height.saturating_add(2).min(available_area.height);

        let x = available_area.x + available_area.width.saturating_sub(width) / 2;
        let y = available_area.y + available_area.height.saturating_sub(height) / 2;

        let dialog_area = Rect {
            x,
            y,
            width,
            height,
        };

        let content_area = Rect {
            x: dialog_area.x + 1 + Self::PADDING_X,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(2 + 2 * Self::PADDING_X),
            height: dialog_area.height.saturating_sub(2),
        };

        Self {
            available_area,
            dialog_area,
            content_area,
        }
    }

    /// Width available to content for a dialog drawn inside `available_area`
    pub fn content_width(settings: &DialogSettings, available_area: Rect) -> u16 {
        Self::outer_width(settings, available_area).saturating_sub(2 + 2 * Self::PADDING_X)
    }

    fn outer_width(settings: &DialogSettings, available_area: Rect) -> u16 {
        let min_cols = px_to_columns(settings.min_width);
        let max_cols = px_to_columns(settings.max_width).max(min_cols);
        max_cols.min(available_area.width)
    }
}

/// Convert a logical pixel width to terminal columns
pub fn px_to_columns(px: u16) -> u16 {
    px / CELL_WIDTH_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{style::Color, text::Line};

    #[test]
    fn test_defaults_without_overrides() {
        let frame = DialogFrame::resolve(&BaseDialogProps::new("Hello"));

        assert_eq!(frame.dialog.min_width, 450);
        assert_eq!(frame.dialog.max_width, 450);
        assert_eq!(frame.content.dialog_type, DialogType::Normal);
        assert!(!frame.content.show_close_button);
        assert!(frame.modal.is_blocking);
        assert!(frame.modal.dark_overlay);
    }

    #[test]
    fn test_absent_title_renders_empty() {
        let frame = DialogFrame::resolve(&BaseDialogProps::new("Hello"));
        assert_eq!(frame.content.title, "");
    }

    #[test]
    fn test_caller_title_beats_content_overrides() {
        let props = BaseDialogProps::new("Hello")
            .with_title("Delete file")
            .with_content_overrides(ContentOverrides {
                title: Some("Overridden".to_string()),
                subtext: Some("This cannot be undone".to_string()),
                ..ContentOverrides::default()
            });

        let frame = DialogFrame::resolve(&props);
        assert_eq!(frame.content.title, "Delete file");
        assert_eq!(frame.content.subtext.as_deref(), Some("This cannot be undone"));
    }

    #[test]
    fn test_content_override_title_dropped_without_caller_title() {
        let props = BaseDialogProps::new("Hello").with_content_overrides(ContentOverrides {
            title: Some("Overridden".to_string()),
            ..ContentOverrides::default()
        });

        assert_eq!(DialogFrame::resolve(&props).content.title, "");
    }

    #[test]
    fn test_partial_overrides_keep_other_defaults() {
        let props = BaseDialogProps::new("Hello")
            .with_dialog_overrides(DialogOverrides {
                max_width: Some(600),
                ..DialogOverrides::default()
            })
            .with_modal_overrides(ModalOverrides {
                dark_overlay: Some(false),
                ..ModalOverrides::default()
            });

        let frame = DialogFrame::resolve(&props);
        assert_eq!(frame.dialog.min_width, 450);
        assert_eq!(frame.dialog.max_width, 600);
        assert!(frame.modal.is_blocking);
        assert!(!frame.modal.dark_overlay);
    }

    #[test]
    fn test_style_override_is_carried() {
        let style = Style::default().fg(Color::Red);
        let props = BaseDialogProps::new("Hello").with_dialog_overrides(DialogOverrides {
            style: Some(style),
            ..DialogOverrides::default()
        });

        assert_eq!(DialogFrame::resolve(&props).dialog.style, style);
    }

    #[test]
    fn test_layout_is_centered_and_clamped() {
        let settings = DialogSettings::default();
        let layout = DialogLayout::calculate(&settings, Rect::new(0, 0, 100, 30), 6);

        assert_eq!(layout.dialog_area.width, 50);
        assert_eq!(layout.dialog_area.height, 8);
        assert_eq!(layout.dialog_area.x, 25);
        assert_eq!(layout.dialog_area.y, 11);
        assert_eq!(layout.content_area.width, 46);

        let narrow = DialogLayout::calculate(&settings, Rect::new(0, 0, 30, 5), 10);
        assert_eq!(narrow.dialog_area.width, 30);
        assert_eq!(narrow.dialog_area.height, 5);
    }

    #[test]
    fn test_rich_content_without_lines_is_empty() {
        assert!(DialogContent::from(Text::default()).is_empty());
        let content = DialogContent::from(Text::from(vec![Line::from("first"), Line::from("second")]));
        assert!(!content.is_empty());
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_string(&DialogOutcome::PromptOrReject(Some("Ada".into())))
            .expect("serialize");
        assert_eq!(json, r#"{"kind":"prompt_or_reject","value":"Ada"}"#);

        let json = serde_json::to_string(&DialogOutcome::Acknowledge).expect("serialize");
        assert_eq!(json, r#"{"kind":"acknowledge"}"#);
    }
}

//! Text-entry dialog, the terminal counterpart of `prompt()`
//!
//! The typed text lives in a cell outside render state. Every edit
//! overwrites it; the confirm button reads it once. A field that was never
//! edited confirms as the empty string.

use super::{
    button::{DialogButton, Trigger},
    simple::{
        content_text, text_height, DialogBody, Focus, KeyDisposition, SimpleDialog,
        SimpleDialogProps,
    },
    types::{
        BaseDialogProps, Dialog, DialogContent, DialogFrame, DEFAULT_CONFIRM_TEXT,
        DEFAULT_REJECT_TEXT,
    },
};
use crate::tui::{components::Component, themes::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use parking_lot::Mutex;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::sync::Arc;
use tracing::warn;
use tui_textarea::TextArea;

/// Called with `Some(text)` on confirm and `None` on reject
pub type PromptHandler = Arc<dyn Fn(Option<String>) + Send + Sync>;

/// Rows taken by the bordered single-line field
const FIELD_HEIGHT: u16 = 3;

/// Passthrough configuration for the text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldOverrides {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub style: Option<Style>,
}

pub struct PromptDialogProps {
    pub base: BaseDialogProps,
    /// `"Yes"` when unset
    pub confirm_button_text: Option<String>,
    /// `"No"` when unset
    pub reject_button_text: Option<String>,
    pub text_field_overrides: Option<TextFieldOverrides>,
    /// Use the body message as the field's label
    pub message_as_label: bool,
    pub on_close: PromptHandler,
}

impl PromptDialogProps {
    pub fn new<F>(base: BaseDialogProps, on_close: F) -> Self
    where
        F: Fn(Option<String>) + Send + Sync + 'static,
    {
        Self {
            base,
            confirm_button_text: None,
            reject_button_text: None,
            text_field_overrides: None,
            message_as_label: false,
            on_close: Arc::new(on_close),
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_button_text = Some(text.into());
        self
    }

    pub fn with_reject_text(mut self, text: impl Into<String>) -> Self {
        self.reject_button_text = Some(text.into());
        self
    }

    pub fn with_text_field_overrides(mut self, overrides: TextFieldOverrides) -> Self {
        self.text_field_overrides = Some(overrides);
        self
    }

    pub fn message_as_label(mut self, enabled: bool) -> Self {
        self.message_as_label = enabled;
        self
    }
}

/// How the text field is labelled, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub enum LabelMode {
    /// The body message is drawn as part of the field group
    Message(DialogContent),
    /// The field carries its own label; the body message is drawn as usual
    Field(String),
    Unlabeled,
}

impl LabelMode {
    fn resolve(message_as_label: bool, message: &DialogContent, label: Option<String>) -> Self {
        match (message_as_label, label) {
            (true, Some(label)) => {
                warn!(
                    label = %label,
                    "message_as_label is ignored because the text field has its own label"
                );
                Self::Field(label)
            }
            (true, None) => Self::Message(message.clone()),
            (false, Some(label)) => Self::Field(label),
            (false, None) => Self::Unlabeled,
        }
    }
}

struct PromptField {
    textarea: TextArea<'static>,
    label: LabelMode,
    style: Style,
    value: Arc<Mutex<Option<String>>>,
}

impl PromptField {
    fn input(&mut self, key: KeyEvent) {
        if self.textarea.input(key) {
            self.commit();
        }
    }

    fn paste(&mut self, text: &str) {
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if self.textarea.insert_str(single_line) {
            self.commit();
        }
    }

    fn commit(&self) {
        *self.value.lock() = Some(self.textarea.lines().concat());
    }
}

impl DialogBody for PromptField {
    fn height(&self, width: u16) -> u16 {
        match &self.label {
            LabelMode::Message(content) => {
                text_height(&content_text(content, width), width).saturating_add(FIELD_HEIGHT)
            }
            LabelMode::Field(_) | LabelMode::Unlabeled => FIELD_HEIGHT,
        }
    }

    fn replaces_message(&self) -> bool {
        matches!(self.label, LabelMode::Message(_))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let styles = theme.styles();
        let mut field_area = area;

        if let LabelMode::Message(content) = &self.label {
            let text = content_text(content, area.width);
            let height = text_height(&text, area.width).min(area.height);
            frame.render_widget(
                Paragraph::new(text)
                    .style(styles.dialog_content)
                    .wrap(Wrap { trim: false }),
                Rect { height, ..area },
            );
            field_area = Rect {
                y: area.y + height,
                height: area.height - height,
                ..area
            };
        }

        let border = if focused {
            styles.field_border_focused
        } else {
            styles.field_border
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border);
        if let LabelMode::Field(label) = &self.label {
            block = block.title(format!(" {} ", label));
        }

        self.textarea.set_block(block);
        self.textarea.set_style(styles.dialog_content.patch(self.style));
        self.textarea.set_placeholder_style(styles.field_placeholder);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_cursor_style(if focused {
            styles.field_cursor
        } else {
            Style::default()
        });

        frame.render_widget(self.textarea.widget(), field_area);
    }
}

/// Dialog with a text field plus Reject then Confirm buttons
pub struct PromptDialog {
    inner: SimpleDialog,
    field: PromptField,
}

impl PromptDialog {
    pub const REJECT_INDEX: usize = 0;
    pub const CONFIRM_INDEX: usize = 1;

    pub fn new(props: PromptDialogProps) -> Self {
        let overrides = props.text_field_overrides.unwrap_or_default();
        let label = LabelMode::resolve(props.message_as_label, &props.base.message, overrides.label);
        let value = Arc::new(Mutex::new(None));

        let mut textarea = TextArea::default();
        if let Some(placeholder) = overrides.placeholder {
            textarea.set_placeholder_text(placeholder);
        }

        let reject = {
            let on_close = props.on_close.clone();
            DialogButton::standard(
                props
                    .reject_button_text
                    .unwrap_or_else(|| DEFAULT_REJECT_TEXT.to_string()),
            )
            .on_activate(move |_| {
                on_close(None);
                None
            })
        };

        let confirm = {
            let on_close = props.on_close;
            let value = Arc::clone(&value);
            DialogButton::primary(
                props
                    .confirm_button_text
                    .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            )
            .on_activate(move |_| {
                let text = value.lock().clone().unwrap_or_default();
                on_close(Some(text));
                None
            })
        };

        let inner = SimpleDialog::new(
            SimpleDialogProps::new(props.base)
                .with_button(reject)
                .with_button(confirm),
        )
        .with_focusable_body();

        Self {
            inner,
            field: PromptField {
                textarea,
                label,
                style: overrides.style.unwrap_or_default(),
                value,
            },
        }
    }

    pub fn inner(&self) -> &SimpleDialog {
        &self.inner
    }

    pub fn label_mode(&self) -> &LabelMode {
        &self.field.label
    }

    /// Text typed so far; `None` until the field is first edited
    pub fn uncommitted_value(&self) -> Option<String> {
        self.field.value.lock().clone()
    }

    fn field_focused(&self) -> bool {
        self.inner.focus() == Some(Focus::Body)
    }
}

fn is_newline(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}

#[async_trait]
impl Component for PromptDialog {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if self.inner.handle_key(event) == KeyDisposition::Handled || !self.field_focused() {
            return Ok(());
        }

        if is_newline(&event) {
            self.inner.activate(Self::CONFIRM_INDEX, Trigger::Key(event));
        } else {
            self.field.input(event);
        }
        Ok(())
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.inner.handle_mouse(event);
        Ok(())
    }

    async fn handle_paste(&mut self, text: String) -> Result<()> {
        if self.field_focused() {
            self.field.paste(&text);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let field: &mut dyn DialogBody = &mut self.field;
        self.inner.render_with_body(frame, area, theme, Some(field));
    }

    fn size(&self) -> Rect {
        self.inner.size()
    }

    fn set_size(&mut self, size: Rect) {
        self.inner.set_size(size);
    }
}

impl Dialog for PromptDialog {
    fn frame(&self) -> &DialogFrame {
        self.inner.frame()
    }
}

//! Yes/no dialog, the terminal counterpart of `confirm()`

use super::{
    button::DialogButton,
    simple::{SimpleDialog, SimpleDialogProps},
    types::{BaseDialogProps, Dialog, DialogFrame, DEFAULT_CONFIRM_TEXT, DEFAULT_REJECT_TEXT},
};
use crate::tui::{components::Component, themes::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::sync::Arc;

/// Called with `true` on confirm and `false` on reject
pub type ConfirmHandler = Arc<dyn Fn(bool) + Send + Sync>;

pub struct ConfirmDialogProps {
    pub base: BaseDialogProps,
    /// `"Yes"` when unset
    pub confirm_button_text: Option<String>,
    /// `"No"` when unset
    pub reject_button_text: Option<String>,
    pub on_close: ConfirmHandler,
}

impl ConfirmDialogProps {
    pub fn new<F>(base: BaseDialogProps, on_close: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        Self {
            base,
            confirm_button_text: None,
            reject_button_text: None,
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
}

/// Dialog with Reject then Confirm buttons
pub struct ConfirmDialog {
    inner: SimpleDialog,
}

impl ConfirmDialog {
    pub const REJECT_INDEX: usize = 0;
    pub const CONFIRM_INDEX: usize = 1;

    pub fn new(props: ConfirmDialogProps) -> Self {
        let reject = {
            let on_close = props.on_close.clone();
            DialogButton::standard(
                props
                    .reject_button_text
                    .unwrap_or_else(|| DEFAULT_REJECT_TEXT.to_string()),
            )
            .on_activate(move |_| {
                on_close(false);
                None
            })
        };

        let confirm = {
            let on_close = props.on_close;
            DialogButton::primary(
                props
                    .confirm_button_text
                    .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
            )
            .on_activate(move |_| {
                on_close(true);
                None
            })
        };

        let props = SimpleDialogProps::new(props.base)
            .with_button(reject)
            .with_button(confirm);

        Self {
            inner: SimpleDialog::new(props),
        }
    }

    pub fn inner(&self) -> &SimpleDialog {
        &self.inner
    }
}

#[async_trait]
impl Component for ConfirmDialog {
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        self.inner.handle_key_event(event).await
    }

    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.inner.handle_mouse_event(event).await
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.inner.render(frame, area, theme);
    }

    fn size(&self) -> Rect {
        self.inner.size()
    }

    fn set_size(&mut self, size: Rect) {
        self.inner.set_size(size);
    }
}

impl Dialog for ConfirmDialog {
    fn frame(&self) -> &DialogFrame {
        self.inner.frame()
    }
}

//! Acknowledgement dialog, the terminal counterpart of `alert()`

use super::{
    button::DialogButton,
    simple::{SimpleDialog, SimpleDialogProps},
    types::{BaseDialogProps, Dialog, DialogFrame, DEFAULT_OKAY_TEXT},
};
use crate::tui::{components::Component, themes::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use std::sync::Arc;

/// Called once per acknowledgement
pub type AcknowledgeHandler = Arc<dyn Fn() + Send + Sync>;

pub struct AlertDialogProps {
    pub base: BaseDialogProps,
    /// Label of the single button, `"Okay"` when unset
    pub button_text: Option<String>,
    pub on_close: AcknowledgeHandler,
}

impl AlertDialogProps {
    pub fn new<F>(base: BaseDialogProps, on_close: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            base,
            button_text: None,
            on_close: Arc::new(on_close),
        }
    }

    pub fn with_button_text(mut self, text: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self
    }
}

/// Dialog with a single Primary acknowledgement button
pub struct AlertDialog {
    inner: SimpleDialog,
}

impl AlertDialog {
    pub fn new(props: AlertDialogProps) -> Self {
        let on_close = props.on_close;
        let text = props
            .button_text
            .unwrap_or_else(|| DEFAULT_OKAY_TEXT.to_string());

        let button = DialogButton::primary(text).on_activate(move |_| {
            on_close();
            None
        });

        Self {
            inner: SimpleDialog::new(SimpleDialogProps::new(props.base).with_button(button)),
        }
    }

    pub fn inner(&self) -> &SimpleDialog {
        &self.inner
    }
}

#[async_trait]
impl Component for AlertDialog {
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

impl Dialog for AlertDialog {
    fn frame(&self) -> &DialogFrame {
        self.inner.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::dialogs::{
        button::{ButtonKind, Trigger},
        simple::tests::{press, render_lines},
    };
    use crossterm::event::KeyCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_alert(button_text: Option<&str>) -> (AlertDialog, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut props = AlertDialogProps::new(BaseDialogProps::new("File saved"), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        if let Some(text) = button_text {
            props = props.with_button_text(text);
        }
        (AlertDialog::new(props), calls)
    }

    #[test]
    fn test_single_primary_button_with_default_label() {
        let (dialog, _) = counting_alert(None);
        let buttons = dialog.inner().buttons();

        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].kind, ButtonKind::Primary);
        assert_eq!(buttons[0].text, "Okay");
    }

    #[tokio::test]
    async fn test_enter_acknowledges_once() {
        let (mut dialog, calls) = counting_alert(None);

        dialog
            .handle_key_event(press(KeyCode::Enter))
            .await
            .expect("key handled");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(dialog.inner().messages().is_empty());
    }

    #[test]
    fn test_custom_label_keeps_semantics() {
        let (mut dialog, calls) = counting_alert(Some("Got it"));
        assert_eq!(dialog.inner().buttons()[0].text, "Got it");

        dialog.inner.activate(0, Trigger::Key(press(KeyCode::Enter)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let screen = render_lines(&mut dialog, 80, 20).join("\n");
        assert!(screen.contains("Got it"));
        assert!(screen.contains("File saved"));
    }
}

use crate::config::{ButtonLabels, Config};
use crate::tui::{
    components::dialogs::{
        AlertDialog, AlertDialogProps, BaseDialogProps, ConfirmDialog, ConfirmDialogProps,
        ContentOverrides, Dialog, DialogButton, DialogOutcome, Message, ModalOverrides,
        PromptDialog, PromptDialogProps, SimpleDialog, SimpleDialogProps, TextFieldOverrides,
    },
    events::Event,
    keys::KeyMap,
    themes::Theme,
    Frame,
};
use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::sync::mpsc;
use tracing::debug;

const DOCS_URL: &str = "https://docs.rs/ratatui";

/// What the application is driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Launcher that mounts dialogs on key presses
    Demo,
    /// A single dialog; the app quits once it reports
    Single,
}

/// A dialog to mount, described without its callback
#[derive(Debug, Clone)]
pub enum DialogRequest {
    Alert {
        base: BaseDialogProps,
        button_text: Option<String>,
    },
    Confirm {
        base: BaseDialogProps,
        confirm_text: Option<String>,
        reject_text: Option<String>,
    },
    Prompt {
        base: BaseDialogProps,
        confirm_text: Option<String>,
        reject_text: Option<String>,
        field: TextFieldOverrides,
        message_as_label: bool,
    },
}

impl DialogRequest {
    /// Build the dialog; its `on_close` posts `Event::Dialog` on `sender`
    pub fn build(self, labels: &ButtonLabels, sender: mpsc::UnboundedSender<Event>) -> Box<dyn Dialog> {
        match self {
            Self::Alert { base, button_text } => {
                let props = AlertDialogProps::new(base, move || {
                    post(&sender, DialogOutcome::Acknowledge);
                })
                .with_button_text(button_text.unwrap_or_else(|| labels.okay.clone()));
                Box::new(AlertDialog::new(props))
            }
            Self::Confirm {
                base,
                confirm_text,
                reject_text,
            } => {
                let props = ConfirmDialogProps::new(base, move |confirmed| {
                    post(&sender, DialogOutcome::ConfirmReject(confirmed));
                })
                .with_confirm_text(confirm_text.unwrap_or_else(|| labels.yes.clone()))
                .with_reject_text(reject_text.unwrap_or_else(|| labels.no.clone()));
                Box::new(ConfirmDialog::new(props))
            }
            Self::Prompt {
                base,
                confirm_text,
                reject_text,
                field,
                message_as_label,
            } => {
                let props = PromptDialogProps::new(base, move |value| {
                    post(&sender, DialogOutcome::PromptOrReject(value));
                })
                .with_confirm_text(confirm_text.unwrap_or_else(|| labels.yes.clone()))
                .with_reject_text(reject_text.unwrap_or_else(|| labels.no.clone()))
                .with_text_field_overrides(field)
                .message_as_label(message_as_label);
                Box::new(PromptDialog::new(props))
            }
        }
    }
}

fn post(sender: &mpsc::UnboundedSender<Event>, outcome: DialogOutcome) {
    if sender.send(Event::Dialog(outcome)).is_err() {
        debug!("Dropping dialog outcome, event loop has stopped");
    }
}

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current application dimensions
    pub size: Rect,

    /// Key mappings for the application
    pub key_map: KeyMap,

    /// Current theme for styling
    pub theme: Theme,

    /// Application configuration
    pub config: Config,

    /// Most recent result reported by a dialog
    pub last_outcome: Option<DialogOutcome>,

    mode: Mode,

    /// The mounted dialog, at most one
    dialog: Option<Box<dyn Dialog>>,

    /// Event sender for dialog callbacks
    event_sender: mpsc::UnboundedSender<Event>,
}

impl App {
    /// Interactive launcher
    pub fn demo(config: Config, theme: Theme, event_sender: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            should_quit: false,
            size: Rect::default(),
            key_map: KeyMap::default(),
            theme,
            config,
            last_outcome: None,
            mode: Mode::Demo,
            dialog: None,
            event_sender,
        }
    }

    /// Mount `request` immediately and quit once it reports
    pub fn single(
        config: Config,
        theme: Theme,
        event_sender: mpsc::UnboundedSender<Event>,
        request: DialogRequest,
    ) -> Self {
        let mut app = Self::demo(config, theme, event_sender);
        app.mode = Mode::Single;
        app.mount_request(request);
        app
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Mount a dialog, replacing any dialog already shown
    pub fn mount(&mut self, dialog: Box<dyn Dialog>) {
        if self.dialog.is_some() {
            debug!("Replacing mounted dialog");
        }
        self.dialog = Some(dialog);
    }

    fn mount_request(&mut self, request: DialogRequest) {
        let dialog = request.build(&self.config.button_labels, self.event_sender.clone());
        self.mount(dialog);
    }

    /// Handle incoming events
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.handle_key_event(key_event).await?;
                } else if self.mode == Mode::Demo {
                    self.handle_launcher_key(key_event);
                }
            }

            Event::Mouse(mouse_event) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.handle_mouse_event(mouse_event).await?;
                }
            }

            Event::Paste(text) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.handle_paste(text).await?;
                }
            }

            Event::Resize(width, height) => {
                self.size = Rect::new(0, 0, width, height);
            }

            Event::Dialog(outcome) => self.close_dialog(outcome),

            Event::Tick => {}
        }

        Ok(self.should_quit)
    }

    fn close_dialog(&mut self, outcome: DialogOutcome) {
        if self.dialog.take().is_none() {
            debug!(?outcome, "Ignoring outcome, no dialog is mounted");
            return;
        }

        debug!(?outcome, "Unmounting dialog");
        self.last_outcome = Some(outcome);
        if self.mode == Mode::Single {
            self.should_quit = true;
        }
    }

    fn handle_launcher_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.key_map.open_simple.matches(&key) {
            let dialog = demo_simple(self.event_sender.clone());
            self.mount(Box::new(dialog));
            return;
        }

        let keys = &self.key_map;
        let request = if keys.open_alert.matches(&key) {
            demo_alert()
        } else if keys.open_confirm.matches(&key) {
            demo_confirm()
        } else if keys.open_prompt.matches(&key) {
            demo_prompt(false)
        } else if keys.open_labelled_prompt.matches(&key) {
            demo_prompt(true)
        } else {
            if keys.leave_demo.matches(&key) {
                self.should_quit = true;
            }
            return;
        };

        self.mount_request(request);
    }

    /// Render the application UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.size = frame.size();
        let area = frame.size();

        frame.render_widget(Block::default().style(self.theme.styles().base), area);
        if self.mode == Mode::Demo {
            self.render_launcher(frame, area);
        }

        if let Some(dialog) = self.dialog.as_mut() {
            dialog.render(frame, area, &self.theme);
        }
    }

    fn render_launcher(&self, frame: &mut Frame, area: Rect) {
        let styles = self.theme.styles();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let help = Paragraph::new(self.key_map.help_text())
            .style(styles.base)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles.dialog_border)
                    .title(" termdialog "),
            );
        frame.render_widget(help, chunks[0]);

        let status = match &self.last_outcome {
            Some(outcome) => describe(outcome),
            None => "No dialog answered yet".to_string(),
        };
        let status = Line::from(vec![
            Span::styled("Last result: ", styles.muted),
            Span::styled(status, styles.base),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[1]);
    }
}

/// Human readable form of an outcome
pub fn describe(outcome: &DialogOutcome) -> String {
    match outcome {
        DialogOutcome::Acknowledge => "acknowledged".to_string(),
        DialogOutcome::ConfirmReject(true) => "confirmed".to_string(),
        DialogOutcome::ConfirmReject(false) => "rejected".to_string(),
        DialogOutcome::PromptOrReject(Some(value)) => format!("entered {:?}", value),
        DialogOutcome::PromptOrReject(None) => "prompt cancelled".to_string(),
    }
}

fn demo_alert() -> DialogRequest {
    DialogRequest::Alert {
        base: BaseDialogProps::new("Your changes were saved.").with_title("Saved"),
        button_text: None,
    }
}

fn demo_confirm() -> DialogRequest {
    DialogRequest::Confirm {
        base: BaseDialogProps::new("Discard the draft? This cannot be undone.")
            .with_title("Discard draft"),
        confirm_text: None,
        reject_text: None,
    }
}

fn demo_prompt(message_as_label: bool) -> DialogRequest {
    DialogRequest::Prompt {
        base: BaseDialogProps::new("What should we call you?").with_title("Your name"),
        confirm_text: None,
        reject_text: None,
        field: TextFieldOverrides {
            placeholder: Some("Ada Lovelace".to_string()),
            ..TextFieldOverrides::default()
        },
        message_as_label,
    }
}

/// Custom buttons: message producers, a link, a decorative entry and Close
fn demo_simple(sender: mpsc::UnboundedSender<Event>) -> SimpleDialog {
    let saves = Arc::new(AtomicUsize::new(0));

    let base = BaseDialogProps::new("Buttons may show notices inside the dialog.")
        .with_title("Custom buttons")
        .with_content_overrides(ContentOverrides {
            subtext: Some("Dismiss a notice with its ✕".to_string()),
            show_close_button: Some(true),
            ..ContentOverrides::default()
        })
        .with_modal_overrides(ModalOverrides {
            dark_overlay: Some(false),
            ..ModalOverrides::default()
        });

    let props = SimpleDialogProps::new(base)
        .with_button(DialogButton::standard("Save").on_activate(move |_| {
            let n = saves.fetch_add(1, Ordering::SeqCst) + 1;
            Some(Message::success(format!("Saved {} time(s)", n)))
        }))
        .with_button(
            DialogButton::standard("Check")
                .on_activate(|_| Some(Message::warning("Disk almost full"))),
        )
        .with_button(DialogButton::standard("Docs").with_href(DOCS_URL).with_target("_blank"))
        .with_button(DialogButton::standard("Decorative"))
        .with_button(DialogButton::primary("Close").on_activate(move |_| {
            post(&sender, DialogOutcome::Acknowledge);
            None
        }));

    SimpleDialog::new(props)
}

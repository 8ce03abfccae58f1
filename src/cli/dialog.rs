use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::config::Config;
use crate::tui::{
    self,
    components::dialogs::{
        px_to_columns, BaseDialogProps, ContentOverrides, DialogOutcome, DialogOverrides, DialogType,
        ModalOverrides, TextFieldOverrides,
    },
    themes::Theme,
    App, DialogRequest, EventHandler,
};

/// Exit status when the dialog was accepted
pub const EXIT_ACCEPTED: i32 = 0;

/// Exit status when the dialog was rejected or interrupted
pub const EXIT_REJECTED: i32 = 1;

/// Exit status when termdialog itself failed
pub const EXIT_ERROR: i32 = 2;

/// Options shared by every dialog command
#[derive(Args, Debug, Clone)]
pub struct DialogArgs {
    /// Body message
    #[arg(short = 'm', long = "message")]
    pub message: String,

    /// Dialog title
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Secondary line drawn above the message
    #[arg(long = "subtext")]
    pub subtext: Option<String>,

    /// Draw the title as a filled header bar
    #[arg(long = "large-header")]
    pub large_header: bool,

    /// Dialog width in logical pixels (9 per column)
    #[arg(long = "width")]
    pub width: Option<u16>,

    /// Do not dim the screen behind the dialog
    #[arg(long = "no-overlay")]
    pub no_overlay: bool,
}

impl DialogArgs {
    fn base(&self) -> BaseDialogProps {
        let mut base = BaseDialogProps::new(self.message.clone());
        if let Some(title) = &self.title {
            base = base.with_title(title.clone());
        }

        if self.subtext.is_some() || self.large_header {
            base = base.with_content_overrides(ContentOverrides {
                subtext: self.subtext.clone(),
                dialog_type: self.large_header.then_some(DialogType::LargeHeader),
                ..ContentOverrides::default()
            });
        }

        if let Some(width) = self.width {
            debug!(width, columns = px_to_columns(width), "Fixed dialog width");
            base = base.with_dialog_overrides(DialogOverrides {
                min_width: Some(width),
                max_width: Some(width),
                ..DialogOverrides::default()
            });
        }

        if self.no_overlay {
            base = base.with_modal_overrides(ModalOverrides {
                dark_overlay: Some(false),
                ..ModalOverrides::default()
            });
        }

        base
    }
}

/// Show a message with a single acknowledgement button
#[derive(Args, Debug, Clone)]
pub struct AlertCommand {
    #[command(flatten)]
    pub dialog: DialogArgs,

    /// Label of the acknowledgement button
    #[arg(long = "button-text")]
    pub button_text: Option<String>,
}

impl AlertCommand {
    pub fn request(&self) -> DialogRequest {
        DialogRequest::Alert {
            base: self.dialog.base(),
            button_text: self.button_text.clone(),
        }
    }
}

/// Ask a yes/no question; exits 0 on confirm and 1 on reject
#[derive(Args, Debug, Clone)]
pub struct ConfirmCommand {
    #[command(flatten)]
    pub dialog: DialogArgs,

    /// Label of the confirm button
    #[arg(long = "confirm-text")]
    pub confirm_text: Option<String>,

    /// Label of the reject button
    #[arg(long = "reject-text")]
    pub reject_text: Option<String>,
}

impl ConfirmCommand {
    pub fn request(&self) -> DialogRequest {
        DialogRequest::Confirm {
            base: self.dialog.base(),
            confirm_text: self.confirm_text.clone(),
            reject_text: self.reject_text.clone(),
        }
    }
}

/// Ask for a line of text and print it to stdout
#[derive(Args, Debug, Clone)]
pub struct PromptCommand {
    #[command(flatten)]
    pub dialog: DialogArgs,

    /// Label drawn on the text field
    #[arg(short = 'l', long = "label")]
    pub label: Option<String>,

    /// Use the message as the field's label
    #[arg(long = "message-as-label")]
    pub message_as_label: bool,

    /// Placeholder shown while the field is empty
    #[arg(short = 'p', long = "placeholder")]
    pub placeholder: Option<String>,

    /// Label of the confirm button
    #[arg(long = "confirm-text")]
    pub confirm_text: Option<String>,

    /// Label of the reject button
    #[arg(long = "reject-text")]
    pub reject_text: Option<String>,
}

impl PromptCommand {
    pub fn request(&self) -> DialogRequest {
        DialogRequest::Prompt {
            base: self.dialog.base(),
            confirm_text: self.confirm_text.clone(),
            reject_text: self.reject_text.clone(),
            field: TextFieldOverrides {
                label: self.label.clone(),
                placeholder: self.placeholder.clone(),
                ..TextFieldOverrides::default()
            },
            message_as_label: self.message_as_label,
        }
    }
}

/// Show one dialog, print its result and return the exit status
pub async fn run_single(request: DialogRequest, config: &Config, theme: Theme, json: bool) -> Result<i32> {
    let mut events = EventHandler::new();
    let mut app = App::single(config.clone(), theme, events.sender(), request);

    tui::run(&mut app, &mut events).await?;

    let outcome = app.last_outcome.as_ref();
    match outcome {
        Some(outcome) => info!("Dialog closed: {}", tui::describe(outcome)),
        None => info!("Dialog interrupted"),
    }

    if let Some(output) = render_outcome(outcome, json)? {
        println!("{}", output);
    }
    Ok(exit_code(outcome))
}

/// Accepted dialogs exit 0; rejection and interruption exit 1
pub fn exit_code(outcome: Option<&DialogOutcome>) -> i32 {
    match outcome {
        Some(outcome) if outcome.is_accepted() => EXIT_ACCEPTED,
        _ => EXIT_REJECTED,
    }
}

/// Text printed to stdout for an outcome, if any
pub fn render_outcome(outcome: Option<&DialogOutcome>, json: bool) -> Result<Option<String>> {
    if json {
        return Ok(Some(serde_json::to_string(&outcome)?));
    }

    Ok(match outcome {
        Some(DialogOutcome::PromptOrReject(Some(value))) => Some(value.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(message: &str) -> DialogArgs {
        DialogArgs {
            message: message.to_string(),
            title: None,
            subtext: None,
            large_header: false,
            width: None,
            no_overlay: false,
        }
    }

    #[test]
    fn test_base_props_only_carry_requested_overrides() {
        let base = args("Hello").base();
        assert_eq!(base.title, None);
        assert!(base.content_overrides.is_none());
        assert!(base.dialog_overrides.is_none());
        assert!(base.modal_overrides.is_none());

        let base = DialogArgs {
            title: Some("Greeting".to_string()),
            large_header: true,
            width: Some(360),
            no_overlay: true,
            ..args("Hello")
        }
        .base();
        assert_eq!(base.title.as_deref(), Some("Greeting"));
        let content = base.content_overrides.expect("content overrides");
        assert_eq!(content.dialog_type, Some(DialogType::LargeHeader));
        let dialog = base.dialog_overrides.expect("dialog overrides");
        assert_eq!((dialog.min_width, dialog.max_width), (Some(360), Some(360)));
        let modal = base.modal_overrides.expect("modal overrides");
        assert_eq!(modal.dark_overlay, Some(false));
        assert_eq!(modal.is_blocking, None);
    }

    #[test]
    fn test_prompt_request_carries_field_overrides() {
        let command = PromptCommand {
            dialog: args("Name?"),
            label: Some("Name".to_string()),
            message_as_label: true,
            placeholder: Some("Ada".to_string()),
            confirm_text: None,
            reject_text: Some("Skip".to_string()),
        };

        match command.request() {
            DialogRequest::Prompt {
                field,
                message_as_label,
                reject_text,
                ..
            } => {
                assert_eq!(field.label.as_deref(), Some("Name"));
                assert_eq!(field.placeholder.as_deref(), Some("Ada"));
                assert!(message_as_label);
                assert_eq!(reject_text.as_deref(), Some("Skip"));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(Some(&DialogOutcome::Acknowledge)), 0);
        assert_eq!(exit_code(Some(&DialogOutcome::ConfirmReject(true))), 0);
        assert_eq!(exit_code(Some(&DialogOutcome::ConfirmReject(false))), 1);
        assert_eq!(
            exit_code(Some(&DialogOutcome::PromptOrReject(Some(String::new())))),
            0
        );
        assert_eq!(exit_code(Some(&DialogOutcome::PromptOrReject(None))), 1);
        assert_eq!(exit_code(None), 1);
    }

    #[test]
    fn test_plain_output_prints_only_prompt_values() {
        let value = DialogOutcome::PromptOrReject(Some("Ada".to_string()));
        assert_eq!(
            render_outcome(Some(&value), false).expect("render"),
            Some("Ada".to_string())
        );
        assert_eq!(
            render_outcome(Some(&DialogOutcome::ConfirmReject(true)), false).expect("render"),
            None
        );
    }

    #[test]
    fn test_json_output_is_tagged() {
        let value = DialogOutcome::ConfirmReject(false);
        assert_eq!(
            render_outcome(Some(&value), true).expect("render").as_deref(),
            Some(r#"{"kind":"confirm_reject","value":false}"#)
        );
        assert_eq!(
            render_outcome(None, true).expect("render").as_deref(),
            Some("null")
        );
    }
}

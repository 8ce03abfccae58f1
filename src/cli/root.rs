use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use super::dialog::{self, AlertCommand, ConfirmCommand, PromptCommand, EXIT_ACCEPTED};
use crate::config::Config;
use crate::tui::{self, themes, App, EventHandler};

/// termdialog - alert, confirm and prompt dialogs for shell scripts
#[derive(Parser, Debug)]
#[command(
    name = "termdialog",
    version,
    about = "Browser-style alert, confirm and prompt dialogs for the terminal",
    long_about = r#"termdialog shows a single dialog on the terminal and reports the answer.
The dialog is drawn on stderr so stdout can be captured.

Exit status: 0 accepted, 1 rejected or interrupted, 2 error.

Examples:
  termdialog                                   # Interactive demo
  termdialog alert -m "Build finished"
  termdialog confirm -m "Deploy to production?" && ./deploy.sh
  name=$(termdialog prompt -m "Your name?" --placeholder "Ada")"#
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Print the dialog result as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Theme preset (midnight, daylight)
    #[arg(long = "theme", global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a message with a single acknowledgement button
    Alert(AlertCommand),
    /// Ask a yes/no question
    Confirm(ConfirmCommand),
    /// Ask for a line of text
    Prompt(PromptCommand),
    /// Interactive launcher for every dialog kind
    Demo,
}

impl Cli {
    /// Run the selected command and return the process exit status
    pub async fn execute(self) -> Result<i32> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let mut config = Config::init().await?;
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
            config.validate()?;
        }
        debug!(theme = %config.theme, "Configuration initialized");

        let theme = themes::by_name(&config.theme)
            .ok_or_else(|| anyhow!("Unknown theme '{}'", config.theme))?;

        let request = match &self.command {
            Some(Commands::Alert(command)) => command.request(),
            Some(Commands::Confirm(command)) => command.request(),
            Some(Commands::Prompt(command)) => command.request(),
            Some(Commands::Demo) | None => {
                return Self::start_demo(config, theme).await;
            }
        };

        dialog::run_single(request, &config, theme, self.json).await
    }

    async fn start_demo(config: Config, theme: themes::Theme) -> Result<i32> {
        info!("Starting demo");

        let mut events = EventHandler::new();
        let mut app = App::demo(config, theme, events.sender());
        tui::run(&mut app, &mut events).await?;

        info!("Demo finished");
        Ok(EXIT_ACCEPTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["termdialog"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "termdialog",
            "confirm",
            "-m",
            "Deploy?",
            "--json",
            "--theme",
            "daylight",
            "--reject-text",
            "Abort",
        ])
        .expect("parse");

        assert!(cli.json);
        assert_eq!(cli.theme.as_deref(), Some("daylight"));
        match cli.command {
            Some(Commands::Confirm(command)) => {
                assert_eq!(command.dialog.message, "Deploy?");
                assert_eq!(command.reject_text.as_deref(), Some("Abort"));
                assert_eq!(command.confirm_text, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_prompt_flags() {
        let cli = Cli::try_parse_from([
            "termdialog",
            "prompt",
            "--message",
            "Your name?",
            "--label",
            "Name",
            "--message-as-label",
            "--placeholder",
            "Ada",
        ])
        .expect("parse");

        match cli.command {
            Some(Commands::Prompt(command)) => {
                assert_eq!(command.label.as_deref(), Some("Name"));
                assert!(command.message_as_label);
                assert_eq!(command.placeholder.as_deref(), Some("Ada"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_message_is_required() {
        assert!(Cli::try_parse_from(["termdialog", "alert"]).is_err());
    }
}

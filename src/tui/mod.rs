//! Terminal User Interface module using ratatui
//!
//! The TUI draws on stderr so stdout stays free for dialog results.

mod app;
pub mod components;
mod events;
mod keys;
pub mod themes;

pub use app::{describe, App, DialogRequest, Mode};
pub use events::{Event, EventHandler};
pub use keys::{KeyBinding, KeyMap};

use anyhow::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use tracing::{debug, warn};

pub type Backend = CrosstermBackend<io::Stderr>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Undo the screen modes `init_terminal` enabled
pub fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main TUI entry point; the terminal is restored even when the loop fails
pub async fn run(app: &mut App, event_handler: &mut EventHandler) -> Result<()> {
    let mut terminal = init_terminal()?;
    debug!(mode = ?app.mode(), "Starting event loop");

    let result = run_app(&mut terminal, app, event_handler).await;
    let restored = restore_terminal(&mut terminal);
    finish(result, restored)
}

/// A failed restore is only reported when the loop itself succeeded
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Ok(()), restored) => restored,
        (Err(e), Err(restore_error)) => {
            warn!("Failed to restore terminal: {:#}", restore_error);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
    }
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event_handler.next().await?;
        if app.handle_event(event).await? {
            break;
        }
    }
    Ok(())
}

use crate::tui::components::dialogs::DialogOutcome;
use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event
    Mouse(MouseEvent),

    /// Bracketed paste
    Paste(String),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// A mounted dialog reported its result
    Dialog(DialogOutcome),
}

/// Event handler for managing input events
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel
    sender: mpsc::UnboundedSender<Event>,

    /// How long to wait for terminal input before emitting a tick
    poll_interval: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            receiver,
            sender,
            poll_interval: Duration::from_millis(50),
        }
    }

    /// Get the next event.
    ///
    /// Internal events win over terminal input so a dialog result posted
    /// from a button handler is seen before the next key press.
    pub async fn next(&mut self) -> Result<Event> {
        if let Some(event) = self.try_recv() {
            return Ok(event);
        }

        let interval = self.poll_interval;
        let polled = tokio::task::spawn_blocking(move || -> std::io::Result<Option<CrosstermEvent>> {
            if crossterm::event::poll(interval)? {
                crossterm::event::read().map(Some)
            } else {
                Ok(None)
            }
        })
        .await??;

        Ok(polled.map(Self::convert_crossterm_event).unwrap_or(Event::Tick))
    }

    /// Take a pending internal event without touching the terminal
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Convert crossterm events to application events
    fn convert_crossterm_event(event: CrosstermEvent) -> Event {
        match event {
            CrosstermEvent::Key(key_event) => Event::Key(key_event),
            CrosstermEvent::Mouse(mouse_event) => Event::Mouse(mouse_event),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            CrosstermEvent::Paste(text) => Event::Paste(text),
            // Focus reporting is never enabled
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => Event::Tick,
        }
    }

    /// Get a clone of the sender
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

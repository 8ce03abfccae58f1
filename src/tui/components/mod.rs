pub mod dialogs;

use crate::tui::{themes::Theme, Frame};
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

/// Base trait for all UI components
#[async_trait]
pub trait Component: Send + Sync {
    /// Handle keyboard input
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Handle mouse input
    async fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        let _ = event;
        Ok(())
    }

    /// Handle bracketed paste
    async fn handle_paste(&mut self, text: String) -> Result<()> {
        let _ = text;
        Ok(())
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Get component dimensions
    fn size(&self) -> Rect;

    /// Set component dimensions
    fn set_size(&mut self, size: Rect);

    /// Check if component has focus
    fn has_focus(&self) -> bool {
        false
    }

    /// Set component focus
    fn set_focus(&mut self, focus: bool) {
        let _ = focus;
    }
}

/// Base component state
#[derive(Debug, Clone)]
pub struct ComponentState {
    pub size: Rect,
    pub has_focus: bool,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self {
            size: Rect::default(),
            has_focus: true,
        }
    }
}

impl ComponentState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether a point lies inside an area
pub fn contains_point(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

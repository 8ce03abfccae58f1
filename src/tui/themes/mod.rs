//! Theming for dialog rendering
//!
//! A `Theme` carries the semantic colour palette and the pre-built styles
//! the dialog components draw with. Caller style overrides are patched on
//! top of these styles, never the other way round.

use ratatui::style::{Color, Modifier, Style};

pub mod presets;

pub use presets::{by_name, names, DEFAULT_THEME};

/// Theme represents a complete visual style configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    // Brand colours
    pub primary: Color,
    pub accent: Color,

    // Backgrounds
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_backdrop: Color,

    // Foregrounds
    pub fg_base: Color,
    pub fg_muted: Color,
    pub fg_on_primary: Color,

    // Borders
    pub border: Color,
    pub border_focus: Color,

    // Status colours
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,

    styles: Styles,
}

/// Pre-built styles for dialog parts
#[derive(Debug, Clone)]
pub struct Styles {
    pub base: Style,
    pub muted: Style,

    pub backdrop: Style,
    pub dialog_surface: Style,
    pub dialog_border: Style,
    pub dialog_title: Style,
    pub dialog_title_large: Style,
    pub dialog_subtext: Style,
    pub dialog_content: Style,

    pub button_default: Style,
    pub button_primary: Style,
    pub button_focused: Style,

    pub field_border: Style,
    pub field_border_focused: Style,
    pub field_placeholder: Style,
    pub field_cursor: Style,

    pub message_info: Style,
    pub message_success: Style,
    pub message_warning: Style,
    pub message_severe_warning: Style,
    pub message_error: Style,
    pub message_blocked: Style,
}

impl Theme {
    fn from_palette(name: &str, is_dark: bool, palette: Palette) -> Self {
        let styles = Self::build_styles(&palette);
        Self {
            name: name.to_string(),
            is_dark,
            primary: palette.primary,
            accent: palette.accent,
            bg_base: palette.bg_base,
            bg_surface: palette.bg_surface,
            bg_backdrop: palette.bg_backdrop,
            fg_base: palette.fg_base,
            fg_muted: palette.fg_muted,
            fg_on_primary: palette.fg_on_primary,
            border: palette.border,
            border_focus: palette.border_focus,
            success: palette.success,
            error: palette.error,
            warning: palette.warning,
            info: palette.info,
            styles,
        }
    }

    /// Styles built from the palette
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    fn build_styles(p: &Palette) -> Styles {
        let base = Style::default().fg(p.fg_base);
        let surface = base.bg(p.bg_surface);

        Styles {
            base,
            muted: base.fg(p.fg_muted),

            backdrop: Style::default()
                .bg(p.bg_backdrop)
                .fg(p.fg_muted)
                .add_modifier(Modifier::DIM),
            dialog_surface: surface,
            dialog_border: surface.fg(p.border),
            dialog_title: surface.fg(p.accent).add_modifier(Modifier::BOLD),
            dialog_title_large: Style::default()
                .bg(p.primary)
                .fg(p.fg_on_primary)
                .add_modifier(Modifier::BOLD),
            dialog_subtext: surface.fg(p.fg_muted),
            dialog_content: surface,

            button_default: surface.fg(p.fg_base),
            button_primary: Style::default()
                .bg(p.primary)
                .fg(p.fg_on_primary)
                .add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .fg(p.border_focus)
                .add_modifier(Modifier::BOLD),

            field_border: surface.fg(p.border),
            field_border_focused: surface.fg(p.border_focus),
            field_placeholder: surface.fg(p.fg_muted),
            field_cursor: Style::default().add_modifier(Modifier::REVERSED),

            message_info: surface.fg(p.info),
            message_success: surface.fg(p.success),
            message_warning: surface.fg(p.warning),
            message_severe_warning: surface.fg(p.warning).add_modifier(Modifier::BOLD),
            message_error: surface.fg(p.error),
            message_blocked: surface.fg(p.error).add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::midnight()
    }
}

/// Raw colour set a preset is built from
pub(crate) struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_backdrop: Color,
    pub fg_base: Color,
    pub fg_muted: Color,
    pub fg_on_primary: Color,
    pub border: Color,
    pub border_focus: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button_uses_brand_colour() {
        let theme = Theme::default();
        assert_eq!(theme.styles().button_primary.bg, Some(theme.primary));
        assert_eq!(theme.styles().button_primary.fg, Some(theme.fg_on_primary));
    }

    #[test]
    fn test_backdrop_is_dimmed() {
        let theme = Theme::default();
        assert!(theme
            .styles()
            .backdrop
            .add_modifier
            .contains(Modifier::DIM));
    }
}

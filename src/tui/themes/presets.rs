//! Theme presets
//!
//! `midnight` is the default dark theme; `daylight` is its light
//! counterpart.

use super::{Palette, Theme};
use ratatui::style::Color;

/// Name of the theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "midnight";

/// Dark theme with a purple accent
pub fn midnight() -> Theme {
    Theme::from_palette(
        "midnight",
        true,
        Palette {
            primary: Color::Rgb(0x8A, 0x67, 0xFF),
            accent: Color::Rgb(0xFF, 0xE1, 0x9C),
            bg_base: Color::Rgb(0x1E, 0x1E, 0x24),
            bg_surface: Color::Rgb(0x2D, 0x2D, 0x35),
            bg_backdrop: Color::Rgb(0x12, 0x12, 0x16),
            fg_base: Color::Rgb(0xD0, 0xD0, 0xD0),
            fg_muted: Color::Rgb(0x90, 0x90, 0x98),
            fg_on_primary: Color::Rgb(0xF5, 0xF5, 0xF5),
            border: Color::Rgb(0x4A, 0x4A, 0x55),
            border_focus: Color::Rgb(0x8A, 0x67, 0xFF),
            success: Color::Rgb(0x4C, 0xAF, 0x50),
            error: Color::Rgb(0xF4, 0x43, 0x36),
            warning: Color::Rgb(0xFF, 0xA5, 0x00),
            info: Color::Rgb(0x29, 0xB6, 0xF6),
        },
    )
}

/// Light theme with darker accents for contrast
pub fn daylight() -> Theme {
    Theme::from_palette(
        "daylight",
        false,
        Palette {
            primary: Color::Rgb(0x00, 0x78, 0xD4),
            accent: Color::Rgb(0x32, 0x31, 0x30),
            bg_base: Color::Rgb(0xF3, 0xF2, 0xF1),
            bg_surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            bg_backdrop: Color::Rgb(0xC8, 0xC6, 0xC4),
            fg_base: Color::Rgb(0x32, 0x31, 0x30),
            fg_muted: Color::Rgb(0x60, 0x5E, 0x5C),
            fg_on_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
            border: Color::Rgb(0x8A, 0x88, 0x86),
            border_focus: Color::Rgb(0x00, 0x78, 0xD4),
            success: Color::Rgb(0x10, 0x7C, 0x10),
            error: Color::Rgb(0xA4, 0x26, 0x2C),
            warning: Color::Rgb(0x97, 0x5A, 0x16),
            info: Color::Rgb(0x00, 0x5A, 0x9E),
        },
    )
}

/// Names of every bundled preset
pub fn names() -> &'static [&'static str] {
    &["midnight", "daylight"]
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<Theme> {
    match name {
        "midnight" => Some(midnight()),
        "daylight" => Some(daylight()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_preset_resolves() {
        for name in names() {
            let theme = by_name(name).expect("listed preset");
            assert_eq!(theme.name, *name);
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(by_name("solarized").is_none());
    }

    #[test]
    fn test_default_theme_is_dark() {
        assert!(by_name(DEFAULT_THEME).map(|t| t.is_dark).unwrap_or(false));
    }
}

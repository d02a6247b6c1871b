//! TUI color theme.

use ratatui::style::Color;

use crate::post::ThemeKind;

#[derive(Clone, Copy)]
pub(crate) struct UiTheme {
    // Primary palette
    pub accent: Color,
    pub good: Color,
    pub warning: Color,
    pub critical: Color,

    // UI chrome
    pub border: Color,
    pub muted: Color,
    pub text: Color,
    pub text_dim: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0, 212, 255),
            good: Color::Rgb(163, 230, 53),
            warning: Color::Rgb(251, 191, 36),
            critical: Color::Rgb(255, 68, 85),
            border: Color::Gray,
            muted: Color::DarkGray,
            text: Color::White,
            text_dim: Color::Gray,
        }
    }
}

impl UiTheme {
    /// Accent color for a resolved post theme.
    pub fn accent_for(&self, kind: ThemeKind) -> Color {
        match kind {
            ThemeKind::Peace => Color::Rgb(145, 234, 228),
            ThemeKind::Adventure => Color::Rgb(242, 153, 74),
            ThemeKind::Gratitude => Color::Rgb(255, 154, 158),
            ThemeKind::Creative => Color::Rgb(161, 140, 209),
            ThemeKind::Fitness => Color::Rgb(168, 224, 99),
            ThemeKind::Generic => self.accent,
        }
    }
}

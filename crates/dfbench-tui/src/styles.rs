//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy)]
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
}

/// Theme used by every panel.
pub const THEME: ColorTheme = ColorTheme {
    primary: Color::Cyan,
    success: Color::Green,
    error: Color::Red,
    warning: Color::Yellow,
    muted: Color::DarkGray,
    border: Color::Gray,
};

impl Default for ColorTheme {
    fn default() -> Self {
        THEME
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Key hint in the footer.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

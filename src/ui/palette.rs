//! Colors derived from the page theme

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by every widget on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                error: Color::Red,
                success: Color::Green,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }

    /// Base style for text on the page background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Border style for a focused or unfocused widget
    pub fn border(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_backgrounds() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_border_follows_focus() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.border(true).fg, Some(Color::Cyan));
        assert_eq!(palette.border(false).fg, Some(Color::DarkGray));
    }
}

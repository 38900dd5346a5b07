//! Application state definitions

use super::calculator::CalculatorState;
use super::forms::RegistrationForm;
use super::slider::SliderState;
use super::theme::Theme;
use crate::config::PageConfig;

/// Page section holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Form,
    Theme,
    Slider,
    Calculator,
}

impl Section {
    pub fn next(&self) -> Self {
        match self {
            Self::Form => Self::Theme,
            Self::Theme => Self::Slider,
            Self::Slider => Self::Calculator,
            Self::Calculator => Self::Form,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Form => Self::Calculator,
            Self::Theme => Self::Form,
            Self::Slider => Self::Theme,
            Self::Calculator => Self::Slider,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Form => "Registration",
            Self::Theme => "Theme",
            Self::Slider => "Distance",
            Self::Calculator => "Height Calculator",
        }
    }
}

/// Everything shown on the page
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Section,
    pub theme: Theme,
    pub form: RegistrationForm,
    pub slider: SliderState,
    pub calculator: CalculatorState,
}

impl AppState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            slider: SliderState::from_config(config),
            ..Self::default()
        }
    }

    /// Flip light/dark mode and return the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }
}

//! Application state and core logic

use crate::config::PageConfig;
use crate::state::{AppState, CalculatorOutput, Form, RegistrationForm, Section, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Short-lived message for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &PageConfig) -> Self {
        Self {
            state: AppState::new(config),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.status_message = None;

        // Theme toggle works from every section
        let toggle_shortcut = key.code == KeyCode::Char('t')
            && key.modifiers.contains(crate::platform::ACTION_MODIFIER);
        if key.code == KeyCode::F(2) || toggle_shortcut {
            self.toggle_theme();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus {
            Section::Form => self.handle_form_key(key),
            Section::Theme => self.handle_theme_key(key),
            Section::Slider => self.handle_slider_key(key),
            Section::Calculator => self.handle_calculator_key(key),
        }
        Ok(())
    }

    /// Move focus forward, stepping through the form fields first
    fn focus_next(&mut self) {
        if self.state.focus == Section::Form && !self.state.form.is_submit_active() {
            self.state.form.next_field();
            return;
        }
        self.state.focus = self.state.focus.next();
        if self.state.focus == Section::Form {
            self.state.form.set_active_field(0);
        }
        tracing::debug!("Focus moved to {}", self.state.focus.label());
    }

    /// Move focus backward, entering the form at its submit button
    fn focus_prev(&mut self) {
        if self.state.focus == Section::Form && self.state.form.active_field() > 0 {
            self.state.form.prev_field();
            return;
        }
        self.state.focus = self.state.focus.prev();
        if self.state.focus == Section::Form {
            self.state
                .form
                .set_active_field(RegistrationForm::SUBMIT_INDEX);
        }
        tracing::debug!("Focus moved to {}", self.state.focus.label());
    }

    fn toggle_theme(&mut self) {
        let theme = self.state.toggle_theme();
        tracing::info!("Switched to {} mode", theme.name());
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.form.is_submit_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s')
                if ctrl || key.modifiers.contains(crate::platform::ACTION_MODIFIER) =>
            {
                self.submit_form();
            }
            KeyCode::Enter if on_submit => self.submit_form(),
            KeyCode::Enter | KeyCode::Down => self.state.form.next_field(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.state.form.dismiss_feedback(),
            KeyCode::Char(c) if !on_submit && !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace if !on_submit => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Validate the form and report the outcome
    fn submit_form(&mut self) {
        match self.state.form.submit() {
            SubmitOutcome::Accepted(snapshot) => {
                tracing::info!(
                    planet = %snapshot.planet,
                    "Registration accepted for {}",
                    snapshot.name
                );
                self.status_message = Some("Registration submitted".to_string());
            }
            SubmitOutcome::Rejected { failed } => {
                let form = &self.state.form;
                let fields: Vec<&str> = [&form.name, &form.email, &form.planet]
                    .into_iter()
                    .filter(|f| f.has_error())
                    .map(|f| f.name.as_str())
                    .collect();
                tracing::info!(?fields, "Registration rejected: {failed} invalid field(s)");
            }
        }
    }

    /// Handle keys on the theme toggle button
    fn handle_theme_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.toggle_theme();
        }
    }

    /// Handle keys on the distance slider
    fn handle_slider_key(&mut self, key: KeyEvent) {
        let slider = &mut self.state.slider;
        let before = slider.value;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => slider.decrement(),
            KeyCode::Right | KeyCode::Char('l') => slider.increment(),
            KeyCode::PageDown => slider.page_down(),
            KeyCode::PageUp => slider.page_up(),
            KeyCode::Home => slider.to_min(),
            KeyCode::End => slider.to_max(),
            _ => return,
        }
        if slider.value != before {
            tracing::debug!("Slider moved to {}", slider.display());
        }
    }

    /// Handle keys in the height calculator
    fn handle_calculator_key(&mut self, key: KeyEvent) {
        let calculator = &mut self.state.calculator;
        match key.code {
            KeyCode::Enter => match calculator.calculate() {
                CalculatorOutput::Meters(meters) => {
                    tracing::info!("Converted height {} to {meters:.2} m", calculator.input.trim());
                }
                CalculatorOutput::InvalidHeight => {
                    tracing::debug!("Rejected height input {:?}", calculator.input);
                }
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                calculator.push_char(c)
            }
            KeyCode::Backspace => calculator.pop_char(),
            KeyCode::Esc => calculator.output = None,
            _ => {}
        }
    }
}

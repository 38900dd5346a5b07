//! Registration form state and submit orchestration

use super::field::FormField;
use crate::state::validation::{validate_email, validate_name, validate_planet, ValidationResult};

/// Aggregate message shown when any field fails validation
pub const FAILURE_MESSAGE: &str = "Please correct the highlighted fields and try again.";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Trimmed field values read at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub planet: String,
}

/// Per-field verdicts for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub planet: ValidationResult,
}

impl SnapshotReport {
    pub fn is_valid(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn failed_count(&self) -> usize {
        [&self.name, &self.email, &self.planet]
            .iter()
            .filter(|r| r.is_err())
            .count()
    }
}

impl FormSnapshot {
    /// Run every validator; never stops at the first failure
    pub fn validate(&self) -> SnapshotReport {
        SnapshotReport {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            planet: validate_planet(&self.planet),
        }
    }
}

/// Content of the aggregate feedback region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Failure(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(msg) | Feedback::Failure(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Feedback::Success(_))
    }
}

/// What a submit did, reported back to the event handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(FormSnapshot),
    Rejected { failed: usize },
}

/// Explorer registration form: name, email, home planet and the submit button
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub planet: FormField,
    pub active_field_index: usize,
    pub feedback: Option<Feedback>,
}

impl RegistrationForm {
    /// Index of the submit button row
    pub const SUBMIT_INDEX: usize = 3;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            planet: FormField::text("planet", "Home Planet"),
            active_field_index: 0,
            feedback: None,
        }
    }

    /// Returns true if the submit button is currently active
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Read and trim the three field values
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            planet: self.planet.trimmed().to_string(),
        }
    }

    /// Validate all fields and update the error and feedback regions.
    ///
    /// On success every field is cleared and focus returns to the first
    /// field. On failure the field contents are left untouched.
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshot = self.snapshot();
        let report = snapshot.validate();

        self.name.set_error(report.name.err().map(|e| e.to_string()));
        self.email.set_error(report.email.err().map(|e| e.to_string()));
        self.planet
            .set_error(report.planet.err().map(|e| e.to_string()));

        if report.is_valid() {
            self.feedback = Some(Feedback::Success(format!(
                "Welcome aboard, {}! Your registration was successful.",
                snapshot.name
            )));
            self.clear_fields();
            self.active_field_index = 0;
            SubmitOutcome::Accepted(snapshot)
        } else {
            self.feedback = Some(Feedback::Failure(FAILURE_MESSAGE.to_string()));
            SubmitOutcome::Rejected {
                failed: report.failed_count(),
            }
        }
    }

    /// Clear field values and their error regions
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.planet.clear();
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        4 // name, email, planet, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.planet),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.planet),
            // Index 3 is the submit button, no FormField for it
            _ => None,
        }
    }
}

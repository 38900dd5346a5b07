//! Form domain layer
//!
//! Field value objects and the registration form with its submit flow.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Feedback, Form, RegistrationForm, SubmitOutcome};

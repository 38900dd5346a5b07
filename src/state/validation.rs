//! Input validators for the registration form
//!
//! Each validator is a pure function over an already-trimmed string. A failure
//! carries a fixed, field-specific message through its `Display` impl.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref DIGIT_REGEX: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Minimum name length, counted in Unicode scalar values (`char`s), not UTF-16 units
pub const NAME_MIN_LEN: usize = 3;

/// Minimum planet name length, counted in Unicode scalar values (`char`s)
pub const PLANET_MIN_LEN: usize = 2;

/// Reason a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 3 characters long.")]
    NameTooShort,
    #[error("Name can only contain letters and spaces.")]
    NameInvalidCharacters,
    #[error("Please enter a valid email address.")]
    EmailInvalidFormat,
    #[error("Planet name must be at least 2 characters long.")]
    PlanetTooShort,
    #[error("Planet name cannot contain numbers.")]
    PlanetContainsDigit,
}

/// `Ok(())` when the field is valid
pub type ValidationResult = Result<(), ValidationError>;

/// Validate an explorer name: at least 3 characters, ASCII letters and whitespace only
pub fn validate_name(name: &str) -> ValidationResult {
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if !NAME_REGEX.is_match(name) {
        return Err(ValidationError::NameInvalidCharacters);
    }
    Ok(())
}

/// Validate an email address against a loose `local@domain.tld` shape.
///
/// No RFC parsing and no domain lookup: any run of non-space, non-`@`
/// characters is accepted for each of the three parts.
pub fn validate_email(email: &str) -> ValidationResult {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::EmailInvalidFormat)
    }
}

/// Validate a home planet name: at least 2 characters, no decimal digits
pub fn validate_planet(name: &str) -> ValidationResult {
    if name.chars().count() < PLANET_MIN_LEN {
        return Err(ValidationError::PlanetTooShort);
    }
    if DIGIT_REGEX.is_match(name) {
        return Err(ValidationError::PlanetContainsDigit);
    }
    Ok(())
}

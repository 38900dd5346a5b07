//! Form field value objects

/// A single text input together with its inline error region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Message shown under the input after a failed submit
    pub error: Option<String>,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            error: None,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed, as read at submit time
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Record the outcome of this field's validator
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Clear both the value and the error region
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

//! Height unit calculator

/// Every height is divided by this before display
pub const HEIGHT_DIVISOR: f64 = 2.5;

/// Message shown for unparseable or non-positive input
pub const INVALID_HEIGHT_MESSAGE: &str = "Please enter a valid positive height.";

/// Result region content after a calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorOutput {
    Meters(f64),
    InvalidHeight,
}

impl CalculatorOutput {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Meters(_))
    }

    /// Text for the result region, rounded to two decimals
    pub fn display(&self) -> String {
        match self {
            Self::Meters(m) => format!("{:.2} meters", round_to_cents(*m)),
            Self::InvalidHeight => INVALID_HEIGHT_MESSAGE.to_string(),
        }
    }
}

/// Round to two decimals with ties going away from zero.
///
/// `{:.2}` alone rounds exact binary ties to even (`0.125` becomes `0.12`).
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a raw height input. Stateless; bad input only affects this call.
pub fn calculate_height(input: &str) -> CalculatorOutput {
    match input.trim().parse::<f64>() {
        Ok(height) if height.is_finite() && height > 0.0 => {
            CalculatorOutput::Meters(height / HEIGHT_DIVISOR)
        }
        _ => CalculatorOutput::InvalidHeight,
    }
}

/// Calculator input box and the last computed output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub input: String,
    pub output: Option<CalculatorOutput>,
}

impl CalculatorState {
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Run the conversion on the current input and store the result
    pub fn calculate(&mut self) -> CalculatorOutput {
        let output = calculate_height(&self.input);
        self.output = Some(output);
        output
    }
}

//! Distance slider state and its thousands-separated display

use crate::config::PageConfig;

/// Group the digits of `value` in threes separated by `,`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Integer slider clamped to `[min, max]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub unit: String,
}

impl SliderState {
    pub const DEFAULT_MIN: i64 = 0;
    pub const DEFAULT_MAX: i64 = 1_000_000;
    pub const DEFAULT_STEP: i64 = 1_000;
    pub const DEFAULT_VALUE: i64 = 500_000;
    pub const DEFAULT_UNIT: &'static str = "km";

    /// Steps moved by a page key
    const PAGE_STEPS: i64 = 10;

    /// Build a slider from the configured range, repairing inconsistent values
    pub fn from_config(config: &PageConfig) -> Self {
        let mut min = config.slider_min.unwrap_or(Self::DEFAULT_MIN);
        let mut max = config.slider_max.unwrap_or(Self::DEFAULT_MAX);
        if max < min {
            std::mem::swap(&mut min, &mut max);
        }
        let step = config.slider_step.unwrap_or(Self::DEFAULT_STEP).max(1);
        let value = config
            .slider_initial
            .unwrap_or(Self::DEFAULT_VALUE)
            .clamp(min, max);
        let unit = config
            .slider_unit
            .clone()
            .unwrap_or_else(|| Self::DEFAULT_UNIT.to_string());

        Self {
            value,
            min,
            max,
            step,
            unit,
        }
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increment(&mut self) {
        self.set_value(self.value.saturating_add(self.step));
    }

    pub fn decrement(&mut self) {
        self.set_value(self.value.saturating_sub(self.step));
    }

    pub fn page_up(&mut self) {
        self.set_value(
            self.value
                .saturating_add(self.step.saturating_mul(Self::PAGE_STEPS)),
        );
    }

    pub fn page_down(&mut self) {
        self.set_value(
            self.value
                .saturating_sub(self.step.saturating_mul(Self::PAGE_STEPS)),
        );
    }

    pub fn to_min(&mut self) {
        self.value = self.min;
    }

    pub fn to_max(&mut self) {
        self.value = self.max;
    }

    /// Position of the value within the range, from 0.0 to 1.0
    pub fn ratio(&self) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        // Widened so a full i64 range cannot overflow
        let offset = i128::from(self.value) - i128::from(self.min);
        let span = i128::from(self.max) - i128::from(self.min);
        (offset as f64 / span as f64).clamp(0.0, 1.0)
    }

    /// Text for the slider value display region
    pub fn display(&self) -> String {
        format!("{} {}", format_thousands(self.value), self.unit)
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

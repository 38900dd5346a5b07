//! Application state module

mod app_state;
mod calculator;
mod forms;
mod slider;
mod theme;
mod validation;

pub use app_state::*;
pub use calculator::*;
pub use forms::*;
pub use slider::*;
pub use theme::*;
pub use validation::*;

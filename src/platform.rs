//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for page shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const TOGGLE_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const TOGGLE_SHORTCUT: &str = "Ctrl+T";

//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    /// Slider one step down.
    Decrease,
    /// Slider one step up.
    Increase,
    /// Slider to its lower bound.
    Minimum,
    /// Slider to its upper bound.
    Maximum,
    Rerun,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Left | KeyCode::Char('-') => KeyAction::Decrease,
        KeyCode::Right | KeyCode::Char('+' | '=') => KeyAction::Increase,
        KeyCode::Home => KeyAction::Minimum,
        KeyCode::End => KeyAction::Maximum,
        KeyCode::Char('r') => KeyAction::Rerun,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => KeyAction::None,
    }
}

//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags};

use crate::navigation::View;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Run the active view's calculate operation.
    Calculate,
    /// Run the active view's compare operation.
    Compare,
    SwitchView(View),
    FocusNext,
    FocusPrev,
    /// Previous method when a method field has focus.
    Left,
    /// Next method when a method field has focus.
    Right,
    Input(char),
    Backspace,
    ClearField,
    PageUp,
    PageDown,
    None,
}

/// Flags requested from terminals that support the kitty keyboard protocol.
///
/// Without them most terminals send Ctrl+Enter as a plain Enter.
#[must_use]
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => KeyAction::ClearField,
        KeyCode::Enter if ctrl => KeyAction::Calculate,
        KeyCode::F(5) => KeyAction::Calculate,
        KeyCode::F(6) => KeyAction::Compare,
        KeyCode::Char('1') if alt => KeyAction::SwitchView(View::Interpolation),
        KeyCode::Char('2') if alt => KeyAction::SwitchView(View::Integration),
        KeyCode::Char('3') if alt => KeyAction::SwitchView(View::Differentiation),
        KeyCode::Char('0' | 'h') if alt => KeyAction::SwitchView(View::Home),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) if !ctrl && !alt => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn quit_keys() {
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);
    }

    #[test]
    fn compute_combination() {
        assert_eq!(
            key(KeyCode::Enter, KeyModifiers::CONTROL),
            KeyAction::Calculate
        );
        assert_eq!(key(KeyCode::F(5), KeyModifiers::NONE), KeyAction::Calculate);
        assert_eq!(key(KeyCode::F(6), KeyModifiers::NONE), KeyAction::Compare);
    }

    #[test]
    fn alt_digits_switch_views() {
        assert_eq!(
            key(KeyCode::Char('1'), KeyModifiers::ALT),
            KeyAction::SwitchView(View::Interpolation)
        );
        assert_eq!(
            key(KeyCode::Char('2'), KeyModifiers::ALT),
            KeyAction::SwitchView(View::Integration)
        );
        assert_eq!(
            key(KeyCode::Char('3'), KeyModifiers::ALT),
            KeyAction::SwitchView(View::Differentiation)
        );
        assert_eq!(
            key(KeyCode::Char('h'), KeyModifiers::ALT),
            KeyAction::SwitchView(View::Home)
        );
    }

    #[test]
    fn plain_digits_are_input() {
        assert_eq!(
            key(KeyCode::Char('1'), KeyModifiers::NONE),
            KeyAction::Input('1')
        );
        assert_eq!(
            key(KeyCode::Char('X'), KeyModifiers::SHIFT),
            KeyAction::Input('X')
        );
    }

    #[test]
    fn focus_keys() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), KeyAction::FocusNext);
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), KeyAction::FocusNext);
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), KeyAction::FocusPrev);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), KeyAction::Backspace);
        assert_eq!(key(KeyCode::Char('u'), KeyModifiers::CONTROL), KeyAction::ClearField);
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), KeyAction::Left);
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), KeyAction::Right);
    }

    #[test]
    fn page_keys() {
        assert_eq!(key(KeyCode::PageUp, KeyModifiers::NONE), KeyAction::PageUp);
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), KeyAction::PageDown);
    }

    #[test]
    fn release_events_ignored() {
        let mut event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn enhanced_ctrl_enter_calculates_once() {
        assert!(keyboard_enhancement_flags()
            .contains(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES));
        assert!(keyboard_enhancement_flags().contains(KeyboardEnhancementFlags::REPORT_EVENT_TYPES));

        let press = KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        let release = KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::CONTROL,
            KeyEventKind::Release,
        );
        assert_eq!(map_key(press), KeyAction::Calculate);
        assert_eq!(map_key(release), KeyAction::None);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(key(KeyCode::Insert, KeyModifiers::NONE), KeyAction::None);
        assert_eq!(key(KeyCode::Char('z'), KeyModifiers::CONTROL), KeyAction::None);
    }
}

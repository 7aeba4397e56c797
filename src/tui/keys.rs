/// Keyboard event to action mapping
///
/// This module converts crossterm KeyEvents into session Actions. Only key
/// presses count; repeats and releases are ignored.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::action::Action;

/// Map a key event to an action
///
/// While the help overlay is open every key only dismisses it, except
/// Ctrl-C which always quits.
pub fn key_to_action(key: KeyEvent, help_visible: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if help_visible {
        trace!("KEY: {:?} dismisses help", key.code);
        return Some(Action::DismissHelp);
    }

    let action = match key.code {
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Right),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| Action::JumpToCompetition(n as usize)),
        KeyCode::Char('r') | KeyCode::Enter => Some(Action::Refresh),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    };

    trace!("KEY: {:?} -> {:?}", key.code, action);
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vim_and_arrow_keys() {
        let pairs = [
            (KeyCode::Char('h'), KeyCode::Left, Action::Left),
            (KeyCode::Char('l'), KeyCode::Right, Action::Right),
            (KeyCode::Char('j'), KeyCode::Down, Action::Down),
            (KeyCode::Char('k'), KeyCode::Up, Action::Up),
        ];
        for (vim, arrow, expected) in pairs {
            assert_eq!(key_to_action(press(vim), false), Some(expected.clone()));
            assert_eq!(key_to_action(press(arrow), false), Some(expected));
        }
    }

    #[test]
    fn test_digit_jumps() {
        assert_eq!(key_to_action(press(KeyCode::Char('1')), false), Some(Action::JumpToCompetition(1)));
        assert_eq!(key_to_action(press(KeyCode::Char('6')), false), Some(Action::JumpToCompetition(6)));
        assert_eq!(key_to_action(press(KeyCode::Char('9')), false), Some(Action::JumpToCompetition(9)));
        assert_eq!(key_to_action(press(KeyCode::Char('0')), false), None);
    }

    #[test]
    fn test_refresh_quit_help_tab() {
        assert_eq!(key_to_action(press(KeyCode::Char('r')), false), Some(Action::Refresh));
        assert_eq!(key_to_action(press(KeyCode::Enter), false), Some(Action::Refresh));
        assert_eq!(key_to_action(press(KeyCode::Char('q')), false), Some(Action::Quit));
        assert_eq!(key_to_action(press(KeyCode::Esc), false), Some(Action::Quit));
        assert_eq!(key_to_action(press(KeyCode::Char('?')), false), Some(Action::ToggleHelp));
        assert_eq!(key_to_action(press(KeyCode::Tab), false), Some(Action::NextView));
    }

    #[test]
    fn test_ctrl_c_quits_even_with_help_open() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(key, false), Some(Action::Quit));
        assert_eq!(key_to_action(key, true), Some(Action::Quit));
    }

    #[test]
    fn test_any_key_dismisses_help() {
        for code in [KeyCode::Char('q'), KeyCode::Char('l'), KeyCode::Char('?'), KeyCode::Esc] {
            assert_eq!(key_to_action(press(code), true), Some(Action::DismissHelp));
        }
    }

    #[test]
    fn test_unmapped_and_released_keys() {
        assert_eq!(key_to_action(press(KeyCode::Char('x')), false), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(key_to_action(release, false), None);
    }
}

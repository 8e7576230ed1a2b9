//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    let state = app.controller.state();
    let query_empty = state.query.is_empty();
    let has_chips = !state.selected.is_empty();

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ReloadCandidates
        }

        // Dropdown navigation
        KeyCode::Up => Action::HighlightUp,
        KeyCode::Down => Action::HighlightDown,
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::HighlightUp,
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::HighlightDown
        }
        KeyCode::Enter if state.highlighted.is_some() => Action::ConfirmHighlighted,

        // Line editing - emacs style
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if query_empty {
                Action::None
            } else {
                Action::ClearQuery
            }
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if query_empty {
                Action::None
            } else {
                Action::InputDeleteWordBack
            }
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) && !query_empty => {
            Action::InputDeleteWordBack
        }

        KeyCode::Backspace => {
            if !query_empty {
                Action::InputBackspace
            } else if has_chips {
                Action::BackspaceChip
            } else {
                Action::None
            }
        }

        // Character input
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::InputChar(c)
        }

        _ => Action::None,
    }
}

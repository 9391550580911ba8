use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::PortalAction;
use crate::portal::View;

/// What a key press means in the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Insert(char),
    Delete,
    Submit,
    SelectNext,
    SelectPrevious,
    Activate,
    Run(PortalAction),
    Quit,
    None,
}

/// Translate a key event into an intent for the given view
pub fn handle_key(view: View, key: KeyEvent) -> InputAction {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match view {
        View::Login => match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Backspace => InputAction::Delete,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Insert(c)
            }
            _ => InputAction::None,
        },
        View::Main => match key.code {
            KeyCode::Down | KeyCode::Tab => InputAction::SelectNext,
            KeyCode::Up | KeyCode::BackTab => InputAction::SelectPrevious,
            KeyCode::Enter => InputAction::Activate,
            KeyCode::Char('d') => InputAction::Run(PortalAction::DownloadConfig),
            KeyCode::Char('s') => InputAction::Run(PortalAction::CheckStatus),
            KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        },
    }
}

//! Key mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ninenine::quiz::QuizInput;

/// Translate a crossterm key event into a quiz input.
///
/// Returns `None` for key releases and repeats so a held key answers once.
pub fn map_key(key: KeyEvent) -> Option<QuizInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(QuizInput::Quit);
    }

    Some(match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => QuizInput::Confirm,
        KeyCode::Char(c @ '1'..='4') => QuizInput::Slot(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => QuizInput::Up,
        KeyCode::Down | KeyCode::Char('j') => QuizInput::Down,
        KeyCode::Left | KeyCode::Char('h') => QuizInput::Left,
        KeyCode::Right | KeyCode::Char('l') => QuizInput::Right,
        KeyCode::Char('m') | KeyCode::Char('M') => QuizInput::ToggleMute,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => QuizInput::Quit,
        _ => QuizInput::Other,
    })
}

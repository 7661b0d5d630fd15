//! Key mapping from terminal events to quiz input.

use crate::types::{Difficulty, QuizAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(QuizAction),
    /// Append a character to the answer field
    Insert(char),
    /// Delete the last character of the answer field
    Backspace,
}

/// Map keyboard input to quiz input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Answer editing
        KeyCode::Char(c @ ('0'..='9' | '-' | '.')) => Some(InputEvent::Insert(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Action(QuizAction::Submit)),

        // Session
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Action(QuizAction::Start)),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Tab => {
            Some(InputEvent::Action(QuizAction::Next))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Action(QuizAction::Reset)),

        // Difficulty
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::F(1) => Some(InputEvent::Action(
            QuizAction::SetDifficulty(Difficulty::Easy),
        )),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::F(2) => Some(InputEvent::Action(
            QuizAction::SetDifficulty(Difficulty::Medium),
        )),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(3) => Some(InputEvent::Action(
            QuizAction::SetDifficulty(Difficulty::Hard),
        )),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

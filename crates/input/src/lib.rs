//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm's key
//! types. It maps key events into [`crate::types::QuizAction`]s or edits of
//! the answer field, and owns that field.

pub mod answer;
pub mod map;

pub use tui_quiz_types as types;

pub use answer::AnswerField;
pub use map::{handle_key_event, should_quit, InputEvent};

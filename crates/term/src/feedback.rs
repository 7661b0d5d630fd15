//! Feedback line: the visual reaction to engine outcome events.

use crate::core::format_answer;
use crate::types::{QuizEvent, GAME_OVER_EMOJI, IDLE_EMOJI};

/// Color family of the feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Failure,
    Finished,
}

/// Emoji plus message shown under the answer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub emoji: &'static str,
    pub text: String,
    pub tone: Tone,
}

impl Default for Feedback {
    fn default() -> Self {
        Self {
            emoji: IDLE_EMOJI,
            text: String::new(),
            tone: Tone::Neutral,
        }
    }
}

impl Feedback {
    /// React to an engine event. Returns whether the line changed.
    ///
    /// Question and tick events leave the line alone.
    pub fn apply(&mut self, event: &QuizEvent) -> bool {
        match event {
            QuizEvent::AnswerCorrect { emoji, .. } => {
                self.set(*emoji, Tone::Success, "Correct! 🎉".to_string());
            }
            QuizEvent::AnswerIncorrect {
                correct_answer,
                emoji,
            } => {
                self.set(
                    *emoji,
                    Tone::Failure,
                    format!("Wrong! Answer: {}", format_answer(*correct_answer)),
                );
            }
            QuizEvent::GameOver { final_score } => {
                self.set(
                    GAME_OVER_EMOJI,
                    Tone::Finished,
                    format!("Game over! Final score: {final_score}"),
                );
            }
            QuizEvent::Reset { emoji, .. } => {
                self.set(*emoji, Tone::Neutral, String::new());
            }
            QuizEvent::QuestionReady { .. } | QuizEvent::TimeTick { .. } => return false,
        }
        true
    }

    fn set(&mut self, emoji: &'static str, tone: Tone, text: String) {
        self.emoji = emoji;
        self.tone = tone;
        self.text = text;
    }
}

//! Serializable journal records.

use serde::{Deserialize, Serialize};

use crate::types::QuizEvent;

/// One journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub session: u32,
    #[serde(flatten)]
    pub body: RecordBody,
}

/// Event payload, tagged by snake_case event name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordBody {
    QuestionReady {
        expression: String,
    },
    AnswerCorrect {
        score: u32,
        emoji: String,
    },
    AnswerIncorrect {
        correct_answer: f64,
        emoji: String,
    },
    TimeTick {
        remaining_secs: u32,
        warning: bool,
    },
    GameOver {
        final_score: u32,
    },
    Reset {
        score: u32,
        remaining_secs: u32,
        expression: String,
        emoji: String,
    },
}

impl From<&QuizEvent> for RecordBody {
    fn from(event: &QuizEvent) -> Self {
        match event {
            QuizEvent::QuestionReady { expression } => RecordBody::QuestionReady {
                expression: expression.clone(),
            },
            QuizEvent::AnswerCorrect { score, emoji } => RecordBody::AnswerCorrect {
                score: *score,
                emoji: (*emoji).to_string(),
            },
            QuizEvent::AnswerIncorrect {
                correct_answer,
                emoji,
            } => RecordBody::AnswerIncorrect {
                correct_answer: *correct_answer,
                emoji: (*emoji).to_string(),
            },
            QuizEvent::TimeTick {
                remaining_secs,
                warning,
            } => RecordBody::TimeTick {
                remaining_secs: *remaining_secs,
                warning: *warning,
            },
            QuizEvent::GameOver { final_score } => RecordBody::GameOver {
                final_score: *final_score,
            },
            QuizEvent::Reset {
                score,
                remaining_secs,
                expression,
                emoji,
            } => RecordBody::Reset {
                score: *score,
                remaining_secs: *remaining_secs,
                expression: (*expression).to_string(),
                emoji: (*emoji).to_string(),
            },
        }
    }
}

impl JournalRecord {
    pub fn new(seq: u64, session: u32, event: &QuizEvent) -> Self {
        Self {
            seq,
            session,
            body: RecordBody::from(event),
        }
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

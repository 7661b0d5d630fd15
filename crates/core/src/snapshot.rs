use crate::types::{Difficulty, Phase, WARNING_SECONDS};

/// Read-only copy of everything the rendering surface displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuizSnapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub score: u32,
    pub remaining_secs: u32,
    pub expression: String,
    pub session_id: u32,
}

impl QuizSnapshot {
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Timer should flash: running with `WARNING_SECONDS` or fewer left.
    pub fn warning(&self) -> bool {
        self.is_running() && self.remaining_secs <= WARNING_SECONDS
    }
}

impl Default for QuizSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            difficulty: Difficulty::Easy,
            score: 0,
            remaining_secs: 0,
            expression: String::new(),
            session_id: 0,
        }
    }
}

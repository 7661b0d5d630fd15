//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal view, the input mapper and the event journal.
//!
//! # Round Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECONDS` | 60 | Length of one quiz session |
//! | `TICK_MS` | 1000 | Countdown interval (one tick per second) |
//! | `WARNING_SECONDS` | 10 | Timer turns into a warning at or below this |
//! | `FRAME_MS` | 16 | Input poll / redraw interval of the terminal loop |
//!
//! # Difficulty Tiers
//!
//! | Tier | Operators | Max operand | Terms | Bonus |
//! |------|-----------|-------------|-------|-------|
//! | easy | `+ -` | 20 | 2 | 10 |
//! | medium | `+ - ×` | 50 | 5 | 20 |
//! | hard | `+ - × ÷` | 100 | 8 | 30 |
//!
//! # Examples
//!
//! ```
//! use tui_quiz_types::{Difficulty, Operator, QuizAction, ROUND_SECONDS};
//!
//! let level = Difficulty::from_str("Medium").unwrap();
//! assert_eq!(level, Difficulty::Medium);
//! assert_eq!(level.bonus(), 20);
//! assert_eq!(level.profile().operators, &[Operator::Add, Operator::Subtract, Operator::Multiply]);
//!
//! let action = QuizAction::from_str("hard").unwrap();
//! assert_eq!(action, QuizAction::SetDifficulty(Difficulty::Hard));
//!
//! assert_eq!(ROUND_SECONDS, 60);
//! ```

/// Length of a quiz session in seconds.
pub const ROUND_SECONDS: u32 = 60;

/// Countdown interval in milliseconds.
pub const TICK_MS: u32 = 1000;

/// Remaining seconds at or below which the timer is flagged as a warning.
pub const WARNING_SECONDS: u32 = 10;

/// Input poll / redraw interval of the terminal loop (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Maximum absolute difference between a submitted and the correct answer.
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// Expression shown while no session is running.
pub const PLACEHOLDER_EXPRESSION: &str = "5 + 3";

/// Answer to [`PLACEHOLDER_EXPRESSION`].
pub const PLACEHOLDER_ANSWER: f64 = 8.0;

/// Emoji picked from on a correct answer.
pub const CELEBRATION_EMOJI: [&str; 5] = ["😄", "🥳", "🎊", "✨", "🏆"];

/// Emoji picked from on a wrong answer.
pub const COMMISERATION_EMOJI: [&str; 5] = ["😢", "😭", "😓", "😔", "🤕"];

/// Emoji shown when the countdown runs out.
pub const GAME_OVER_EMOJI: &str = "🏁";

/// Emoji shown while idle.
pub const IDLE_EMOJI: &str = "😊";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_timing_defaults() {
        assert_eq!(ROUND_SECONDS, 60);
        assert_eq!(TICK_MS, 1000);
        assert_eq!(WARNING_SECONDS, 10);
        assert!((ANSWER_TOLERANCE - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn difficulty_profiles_match_tiers() {
        let easy = Difficulty::Easy.profile();
        assert_eq!(easy.operators, &[Operator::Add, Operator::Subtract]);
        assert_eq!(easy.max_operand, 20);
        assert_eq!(easy.term_count, 2);

        let medium = Difficulty::Medium.profile();
        assert_eq!(medium.operators.len(), 3);
        assert_eq!(medium.max_operand, 50);
        assert_eq!(medium.term_count, 5);

        let hard = Difficulty::Hard.profile();
        assert!(hard.operators.contains(&Operator::Divide));
        assert_eq!(hard.max_operand, 100);
        assert_eq!(hard.term_count, 8);
    }

    #[test]
    fn action_parsing_round_trips_names() {
        for action in [
            QuizAction::Start,
            QuizAction::Submit,
            QuizAction::Next,
            QuizAction::Reset,
            QuizAction::SetDifficulty(Difficulty::Easy),
            QuizAction::SetDifficulty(Difficulty::Medium),
            QuizAction::SetDifficulty(Difficulty::Hard),
        ] {
            assert_eq!(QuizAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(QuizAction::from_str("pause"), None);
    }

    #[test]
    fn time_tick_warning_threshold() {
        assert!(!QuizEvent::time_tick(11).is_warning());
        assert!(QuizEvent::time_tick(10).is_warning());
        assert!(QuizEvent::time_tick(1).is_warning());
    }
}

/// Quiz difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_quiz_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("extreme"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Points awarded for a correct answer at this tier.
    pub fn bonus(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Static generation parameters for this tier.
    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY_PROFILE,
            Difficulty::Medium => &MEDIUM_PROFILE,
            Difficulty::Hard => &HARD_PROFILE,
        }
    }
}

/// Arithmetic operator used in generated expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph used in expression text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_quiz_types::Operator;
    ///
    /// assert_eq!(Operator::Multiply.symbol(), '×');
    /// assert_eq!(Operator::Divide.symbol(), '÷');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Parse an operator glyph. ASCII `*` and `/` are accepted as aliases.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '×' | '*' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// Generation parameters for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Operators drawn from (uniformly, with replacement).
    pub operators: &'static [Operator],
    /// Operands are drawn from `1..=max_operand`.
    pub max_operand: u32,
    /// Number of operands chained in one expression.
    pub term_count: usize,
}

pub const EASY_PROFILE: DifficultyProfile = DifficultyProfile {
    operators: &[Operator::Add, Operator::Subtract],
    max_operand: 20,
    term_count: 2,
};

pub const MEDIUM_PROFILE: DifficultyProfile = DifficultyProfile {
    operators: &[Operator::Add, Operator::Subtract, Operator::Multiply],
    max_operand: 50,
    term_count: 5,
};

pub const HARD_PROFILE: DifficultyProfile = DifficultyProfile {
    operators: &[
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ],
    max_operand: 100,
    term_count: 8,
};

/// Session phase
///
/// The cycle goes: Idle → Running → Ended → Running ..., with `reset`
/// returning to Idle from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Ended => "ended",
        }
    }
}

/// Actions the rendering surface can apply to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Begin a session (no-op while one is running)
    Start,
    /// Check the current answer text
    Submit,
    /// Discard the current question and generate another
    Next,
    /// Switch difficulty tier
    SetDifficulty(Difficulty),
    /// Stop the countdown and restore defaults
    Reset,
}

impl QuizAction {
    /// Parse action from string
    ///
    /// Difficulty names parse to [`QuizAction::SetDifficulty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_quiz_types::{Difficulty, QuizAction};
    ///
    /// assert_eq!(QuizAction::from_str("start"), Some(QuizAction::Start));
    /// assert_eq!(QuizAction::from_str("Next"), Some(QuizAction::Next));
    /// assert_eq!(QuizAction::from_str("easy"), Some(QuizAction::SetDifficulty(Difficulty::Easy)));
    /// assert_eq!(QuizAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Some(QuizAction::Start),
            "submit" => Some(QuizAction::Submit),
            "next" => Some(QuizAction::Next),
            "reset" => Some(QuizAction::Reset),
            other => Difficulty::from_str(other).map(QuizAction::SetDifficulty),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizAction::Start => "start",
            QuizAction::Submit => "submit",
            QuizAction::Next => "next",
            QuizAction::Reset => "reset",
            QuizAction::SetDifficulty(level) => level.as_str(),
        }
    }
}

/// Outcome events emitted by the engine, in emission order.
///
/// The engine never renders anything itself; the terminal view and the
/// journal both react to these.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    QuestionReady {
        expression: String,
    },
    AnswerCorrect {
        score: u32,
        emoji: &'static str,
    },
    AnswerIncorrect {
        correct_answer: f64,
        emoji: &'static str,
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
        expression: &'static str,
        emoji: &'static str,
    },
}

impl QuizEvent {
    /// Build a `TimeTick`, deriving the warning flag.
    pub fn time_tick(remaining_secs: u32) -> Self {
        QuizEvent::TimeTick {
            remaining_secs,
            warning: remaining_secs <= WARNING_SECONDS,
        }
    }

    /// The `Reset` event carrying the default display values.
    pub fn reset_defaults() -> Self {
        QuizEvent::Reset {
            score: 0,
            remaining_secs: ROUND_SECONDS,
            expression: PLACEHOLDER_EXPRESSION,
            emoji: IDLE_EMOJI,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, QuizEvent::TimeTick { warning: true, .. })
    }

    /// snake_case event name
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::QuestionReady { .. } => "question_ready",
            QuizEvent::AnswerCorrect { .. } => "answer_correct",
            QuizEvent::AnswerIncorrect { .. } => "answer_incorrect",
            QuizEvent::TimeTick { .. } => "time_tick",
            QuizEvent::GameOver { .. } => "game_over",
            QuizEvent::Reset { .. } => "reset",
        }
    }
}

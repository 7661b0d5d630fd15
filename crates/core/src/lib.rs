//! Core quiz logic module - pure, deterministic, and testable
//!
//! This crate contains the question generator, the countdown handle and the
//! session state machine. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: the same seed produces the same questions
//! - **Testable**: time is fed in explicitly, no real clock is read
//! - **Event-driven**: outcomes are queued as [`types::QuizEvent`]s for the
//!   caller to drain, nothing is rendered here
//!
//! # Module Structure
//!
//! - [`question`]: expression generation, left-to-right evaluation, tolerance check
//! - [`countdown`]: cancellable one-second timer handle
//! - [`engine`]: session state (score, timer, tier, question, phase)
//! - [`rng`]: seeded LCG used for operand/operator draws
//! - [`snapshot`]: display-state copy for renderers
//!
//! # Example
//!
//! ```
//! use tui_quiz_core::QuizEngine;
//! use tui_quiz_core::types::{Phase, QuizEvent};
//!
//! let mut engine = QuizEngine::new(12345);
//! engine.start();
//! assert!(engine.is_running());
//!
//! // Feed wall time; one tick fires per elapsed second.
//! assert_eq!(engine.advance_time(2_500), 2);
//! assert_eq!(engine.remaining_secs(), 58);
//!
//! let events: Vec<QuizEvent> = engine.drain_events().collect();
//! assert!(matches!(events[0], QuizEvent::QuestionReady { .. }));
//!
//! engine.reset();
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

pub mod countdown;
pub mod engine;
pub mod question;
pub mod rng;
pub mod snapshot;

pub use tui_quiz_types as types;

// Re-export commonly used types for convenience
pub use countdown::Countdown;
pub use engine::{AnswerOutcome, QuizEngine};
pub use question::{format_answer, generate, Question};
pub use rng::SimpleRng;
pub use snapshot::QuizSnapshot;

//! Terminal "quiz renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget toolkits and
//! renders into a plain framebuffer that is diffed and flushed to the
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so layouts can be asserted cell by cell
//! - Decide all cosmetic reactions (feedback line, timer warning) here, from events

pub mod fb;
pub mod feedback;
pub mod quiz_view;
pub mod renderer;

pub use tui_quiz_core as core;
pub use tui_quiz_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use feedback::{Feedback, Tone};
pub use quiz_view::{AnchorY, QuizScreen, QuizView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

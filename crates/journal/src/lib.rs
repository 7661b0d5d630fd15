//! Event journal - JSON-lines log of every engine event
//!
//! Each emitted [`QuizEvent`](crate::types::QuizEvent) becomes one JSON object
//! per line. The file is written by a tokio task fed over an unbounded
//! channel, so the game loop never waits on disk I/O.
//!
//! # Record Format
//!
//! ```text
//! {"seq":1,"session":1,"type":"question_ready","expression":"12 + 7"}
//! {"seq":2,"session":1,"type":"answer_correct","score":10,"emoji":"🥳"}
//! {"seq":3,"session":1,"type":"time_tick","remaining_secs":59,"warning":false}
//! {"seq":4,"session":1,"type":"game_over","final_score":10}
//! ```
//!
//! # Environment Variables
//!
//! - `QUIZ_JOURNAL_PATH`: append records to this file (journal disabled when unset)

pub mod record;
pub mod writer;

pub use tui_quiz_types as types;

pub use record::{JournalRecord, RecordBody};
pub use writer::{EventJournal, JournalConfig};

//! TUI arithmetic quiz (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_quiz::{core,input,journal,term,types}` and holds
//! the glue shared by the binaries: configuration, tracing setup, the
//! [`app::App`] that wires engine, answer field, feedback and journal
//! together, and the command parser for the scripted driver.

pub mod app;
pub mod config;
pub mod script;
pub mod telemetry;

pub use tui_quiz_core as core;
pub use tui_quiz_input as input;
pub use tui_quiz_journal as journal;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;

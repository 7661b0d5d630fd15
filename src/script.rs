//! Line-oriented command driver for headless play.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! start
//! answer 42
//! next
//! difficulty hard
//! wait 1500
//! state
//! reset
//! ```
//!
//! Every event the engine emits is written as a journal JSON line, so a
//! script run produces the same records the terminal UI would journal.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use serde_json::json;
use tracing::warn;

use crate::core::QuizEngine;
use crate::journal::JournalRecord;
use crate::types::{Difficulty, QuizAction};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Action(QuizAction),
    /// Submit this text as the answer
    Answer(String),
    /// Advance the clock by this many milliseconds
    Wait(u32),
    /// Print the current snapshot
    State,
    Blank,
}

pub fn parse_command(line: &str) -> Result<ScriptCommand> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ScriptCommand::Blank);
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let no_arg = |command: ScriptCommand| {
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(anyhow!("{cmd} takes no argument"))
        }
    };

    match cmd.to_ascii_lowercase().as_str() {
        "start" => no_arg(ScriptCommand::Action(QuizAction::Start)),
        "next" => no_arg(ScriptCommand::Action(QuizAction::Next)),
        "reset" => no_arg(ScriptCommand::Action(QuizAction::Reset)),
        "state" => no_arg(ScriptCommand::State),
        "answer" => Ok(ScriptCommand::Answer(rest.to_string())),
        "difficulty" => {
            let level = Difficulty::from_str(rest)
                .ok_or_else(|| anyhow!("unknown difficulty {rest:?}"))?;
            Ok(ScriptCommand::Action(QuizAction::SetDifficulty(level)))
        }
        "wait" => {
            let ms = rest
                .parse::<u32>()
                .with_context(|| format!("wait needs milliseconds, got {rest:?}"))?;
            Ok(ScriptCommand::Wait(ms))
        }
        other => bail!("unknown command {other:?}"),
    }
}

/// Drives an engine from script commands and writes JSON lines.
pub struct ScriptRunner {
    engine: QuizEngine,
    next_seq: u64,
}

impl ScriptRunner {
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            engine,
            next_seq: 1,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Execute one command, writing its output lines to `out`.
    pub fn execute(&mut self, command: &ScriptCommand, out: &mut impl Write) -> Result<()> {
        match command {
            ScriptCommand::Blank => return Ok(()),
            ScriptCommand::Action(action) => {
                self.engine.apply_action(*action, "");
            }
            ScriptCommand::Answer(text) => {
                self.engine.submit_answer(text);
            }
            ScriptCommand::Wait(ms) => {
                self.engine.advance_time(*ms);
            }
            ScriptCommand::State => {
                let snap = self.engine.snapshot();
                let line = json!({
                    "type": "state",
                    "phase": snap.phase.as_str(),
                    "difficulty": snap.difficulty.as_str(),
                    "score": snap.score,
                    "remaining_secs": snap.remaining_secs,
                    "expression": snap.expression,
                    "session": snap.session_id,
                });
                writeln!(out, "{line}")?;
            }
        }

        let session = self.engine.session_id();
        for event in self.engine.drain_events() {
            let rec = JournalRecord::new(self.next_seq, session, &event);
            self.next_seq += 1;
            writeln!(out, "{}", rec.to_line()?)?;
        }
        Ok(())
    }

    /// Run every line of `input`. Bad lines are reported to `err` and skipped.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<()> {
        for (n, line) in input.lines().enumerate() {
            let line = line.context("failed to read script line")?;
            match parse_command(&line) {
                Ok(command) => self.execute(&command, out)?,
                Err(e) => {
                    warn!(line = n + 1, error = %e, "script line rejected");
                    writeln!(err, "line {}: {e}", n + 1)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("start").unwrap(),
            ScriptCommand::Action(QuizAction::Start)
        );
        assert_eq!(
            parse_command("  answer  -12.5 ").unwrap(),
            ScriptCommand::Answer("-12.5".into())
        );
        assert_eq!(parse_command("answer").unwrap(), ScriptCommand::Answer(String::new()));
        assert_eq!(parse_command("wait 1500").unwrap(), ScriptCommand::Wait(1500));
        assert_eq!(
            parse_command("DIFFICULTY Medium").unwrap(),
            ScriptCommand::Action(QuizAction::SetDifficulty(Difficulty::Medium))
        );
        assert_eq!(parse_command("# comment").unwrap(), ScriptCommand::Blank);
        assert_eq!(parse_command("").unwrap(), ScriptCommand::Blank);
    }

    #[test]
    fn rejects_bad_lines() {
        assert!(parse_command("jump").is_err());
        assert!(parse_command("wait soon").is_err());
        assert!(parse_command("difficulty extreme").is_err());
        assert!(parse_command("start now").is_err());
    }

    #[test]
    fn run_reports_errors_and_continues() {
        let mut runner = ScriptRunner::new(QuizEngine::new(3));
        let script = "start\nbogus\nwait 2000\nstate\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        runner.run(script.as_bytes(), &mut out, &mut err).unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("line 2"));

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["type"], "question_ready");
        assert_eq!(lines[1]["type"], "time_tick");
        assert_eq!(lines[2]["remaining_secs"], 58);
        assert_eq!(lines[3]["type"], "state");
        assert_eq!(lines[3]["phase"], "running");
        assert_eq!(lines[2]["seq"], 3);
    }
}

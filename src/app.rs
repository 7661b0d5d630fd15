//! Application glue between the engine and the terminal surface.
//!
//! The engine only emits events; `App` drains them after every operation and
//! decides the cosmetic reactions: clearing the answer field, updating the
//! feedback line and appending to the journal.

use anyhow::Result;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{QuizEngine, QuizSnapshot};
use crate::input::{AnswerField, InputEvent};
use crate::journal::EventJournal;
use crate::term::{Feedback, QuizScreen};
use crate::types::{Phase, QuizAction, QuizEvent};

pub struct App {
    engine: QuizEngine,
    answer: AnswerField,
    feedback: Feedback,
    journal: Option<EventJournal>,
    snapshot: QuizSnapshot,
}

impl App {
    pub fn new(engine: QuizEngine, journal: Option<EventJournal>) -> Self {
        let mut app = Self {
            engine,
            answer: AnswerField::new(),
            feedback: Feedback::default(),
            journal,
            snapshot: QuizSnapshot::default(),
        };
        app.engine.snapshot_into(&mut app.snapshot);
        app
    }

    /// Build from configuration: seeded engine, configured tier, optional journal.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut engine = QuizEngine::new(config.seed);
        engine.set_difficulty(config.difficulty);
        let journal = EventJournal::start(&config.journal)?;
        if journal.is_some() {
            info!("event journal enabled");
        }
        Ok(Self::new(engine, journal))
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn snapshot(&self) -> &QuizSnapshot {
        &self.snapshot
    }

    /// Everything the view needs for one frame.
    pub fn screen(&self) -> QuizScreen<'_> {
        QuizScreen {
            snapshot: &self.snapshot,
            answer: self.answer.as_str(),
            feedback: &self.feedback,
        }
    }

    /// Handle one mapped key. Returns whether anything visible changed.
    ///
    /// Once a session has ended editing and submitting stay disabled until
    /// the next start; every other action still goes through.
    pub fn handle_input(&mut self, input: InputEvent) -> bool {
        let ended = self.engine.phase() == Phase::Ended;
        match input {
            InputEvent::Insert(_) | InputEvent::Backspace if ended => false,
            InputEvent::Action(QuizAction::Submit) if ended => false,
            InputEvent::Insert(c) => self.answer.insert(c),
            InputEvent::Backspace => self.answer.backspace(),
            InputEvent::Action(action) => self.apply(action),
        }
    }

    /// Apply an action to the engine and react to what it emitted.
    pub fn apply(&mut self, action: QuizAction) -> bool {
        let applied = self.engine.apply_action(action, self.answer.as_str());
        if applied {
            debug!(action = action.as_str(), "action applied");
        }
        let events = self.pump_events();
        applied || !events.is_empty()
    }

    /// Feed elapsed wall time. Returns the number of countdown ticks fired.
    pub fn advance_time(&mut self, elapsed_ms: u32) -> u32 {
        let fired = self.engine.advance_time(elapsed_ms);
        if fired > 0 {
            self.pump_events();
        }
        fired
    }

    /// Drain engine events, react to each, and refresh the cached snapshot.
    pub fn pump_events(&mut self) -> Vec<QuizEvent> {
        let events: Vec<QuizEvent> = self.engine.drain_events().collect();
        let session = self.engine.session_id();

        for event in &events {
            match event {
                QuizEvent::QuestionReady { .. } | QuizEvent::Reset { .. } => self.answer.clear(),
                QuizEvent::GameOver { final_score } => {
                    info!(session, final_score, "game over");
                }
                _ => {}
            }
            self.feedback.apply(event);
            if let Some(journal) = self.journal.as_mut() {
                journal.record(session, event);
            }
        }

        self.engine.snapshot_into(&mut self.snapshot);
        events
    }

    /// Flush the journal. Call once before exit.
    pub fn finish(self) -> Result<()> {
        if let Some(journal) = self.journal {
            let recorded = journal.recorded();
            journal.finish()?;
            info!(recorded, "event journal closed");
        }
        Ok(())
    }
}

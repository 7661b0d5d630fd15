//! Quiz engine - owns the session state and emits outcome events
//!
//! The engine is the only thing that mutates session state. Every operation
//! is synchronous; callers drain the resulting [`QuizEvent`]s afterwards and
//! react to them (redraw, feedback, journal).

use tracing::debug;

use crate::countdown::Countdown;
use crate::question::{self, Question};
use crate::rng::SimpleRng;
use crate::snapshot::QuizSnapshot;
use crate::types::*;

/// Result of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerOutcome {
    Correct { score: u32, gained: u32 },
    Incorrect { correct_answer: f64 },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }
}

/// Complete quiz state
#[derive(Debug, Clone)]
pub struct QuizEngine {
    score: u32,
    remaining_secs: u32,
    difficulty: Difficulty,
    question: Option<Question>,
    phase: Phase,
    countdown: Countdown,
    rng: SimpleRng,
    /// Monotonic session id (increments on every successful start).
    session_id: u32,
    /// Events not yet drained by the caller.
    events: Vec<QuizEvent>,
}

impl QuizEngine {
    /// Create an idle engine with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            score: 0,
            remaining_secs: ROUND_SECONDS,
            difficulty: Difficulty::Easy,
            question: Some(Question::placeholder()),
            phase: Phase::Idle,
            countdown: Countdown::new(TICK_MS),
            rng: SimpleRng::new(seed),
            session_id: 0,
            events: Vec::with_capacity(8),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Whether the countdown handle is currently armed.
    pub fn countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    /// Generation of the most recent countdown schedule.
    pub fn countdown_generation(&self) -> u32 {
        self.countdown.generation()
    }

    /// Milliseconds until the next tick, or `None` when no countdown runs.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        self.countdown.until_next_ms()
    }

    /// Events emitted since the last drain, oldest first.
    pub fn pending_events(&self) -> &[QuizEvent] {
        &self.events
    }

    /// Remove and yield pending events in emission order.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, QuizEvent> {
        self.events.drain(..)
    }

    /// Begin a session.
    ///
    /// No-op while already running, so repeated presses never arm a second
    /// countdown. Legal from Idle and Ended.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }

        self.phase = Phase::Running;
        self.score = 0;
        self.remaining_secs = ROUND_SECONDS;
        self.session_id = self.session_id.wrapping_add(1);

        self.generate_question();
        let generation = self.countdown.schedule();

        debug!(
            session = self.session_id,
            difficulty = self.difficulty.as_str(),
            countdown = generation,
            "session started"
        );
        true
    }

    /// Check `raw` against the current question.
    ///
    /// Returns `None` (and emits nothing) unless a session is running with an
    /// active question.
    pub fn submit_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        if !self.is_running() {
            return None;
        }
        let question = self.question.as_ref()?;

        let outcome = if question.is_correct(raw) {
            let gained = self.difficulty.bonus();
            self.score = self.score.saturating_add(gained);
            let emoji = self.pick_emoji(&CELEBRATION_EMOJI);
            self.events.push(QuizEvent::AnswerCorrect {
                score: self.score,
                emoji,
            });
            AnswerOutcome::Correct {
                score: self.score,
                gained,
            }
        } else {
            let correct_answer = question.answer();
            let emoji = self.pick_emoji(&COMMISERATION_EMOJI);
            self.events.push(QuizEvent::AnswerIncorrect {
                correct_answer,
                emoji,
            });
            AnswerOutcome::Incorrect { correct_answer }
        };

        debug!(
            session = self.session_id,
            correct = outcome.is_correct(),
            score = self.score,
            "answer checked"
        );
        Some(outcome)
    }

    /// Replace the current question with a fresh one. Legal in every phase.
    pub fn advance_question(&mut self) {
        self.question = None;
        self.generate_question();
    }

    /// Switch tier. While running the active question is regenerated so it
    /// matches the new profile; otherwise only the stored tier changes.
    pub fn set_difficulty(&mut self, level: Difficulty) {
        self.difficulty = level;
        if self.is_running() {
            self.advance_question();
        }
    }

    /// One countdown step.
    ///
    /// Ignored outside a running session. Reaching zero ends the session,
    /// cancels the countdown and emits `GameOver` exactly once.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);

        if self.remaining_secs == 0 {
            self.countdown.cancel();
            self.phase = Phase::Ended;
            self.events.push(QuizEvent::GameOver {
                final_score: self.score,
            });
            debug!(session = self.session_id, score = self.score, "session ended");
        } else {
            self.events.push(QuizEvent::time_tick(self.remaining_secs));
        }
        true
    }

    /// Feed elapsed wall time into the countdown, firing every due tick.
    ///
    /// Returns the number of ticks fired.
    pub fn advance_time(&mut self, elapsed_ms: u32) -> u32 {
        self.countdown.advance(elapsed_ms);

        let mut fired = 0;
        while self.countdown.take_due() {
            if self.tick() {
                fired += 1;
            }
        }
        fired
    }

    /// Stop the countdown and restore every default, including the tier.
    pub fn reset(&mut self) {
        let cancelled = self.countdown.cancel();

        self.score = 0;
        self.remaining_secs = ROUND_SECONDS;
        self.phase = Phase::Idle;
        self.difficulty = Difficulty::Easy;
        self.question = Some(Question::placeholder());

        self.events.push(QuizEvent::reset_defaults());
        debug!(session = self.session_id, cancelled, "session reset");
    }

    /// Apply a rendering-surface action.
    ///
    /// `answer` is only read by [`QuizAction::Submit`].
    pub fn apply_action(&mut self, action: QuizAction, answer: &str) -> bool {
        match action {
            QuizAction::Start => self.start(),
            QuizAction::Submit => self.submit_answer(answer).is_some(),
            QuizAction::Next => {
                self.advance_question();
                true
            }
            QuizAction::SetDifficulty(level) => {
                self.set_difficulty(level);
                true
            }
            QuizAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut QuizSnapshot) {
        out.phase = self.phase;
        out.difficulty = self.difficulty;
        out.score = self.score;
        out.remaining_secs = self.remaining_secs;
        out.session_id = self.session_id;
        out.expression.clear();
        if let Some(q) = &self.question {
            out.expression.push_str(q.expression());
        }
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let mut s = QuizSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn generate_question(&mut self) {
        let q = question::generate(self.difficulty.profile(), &mut self.rng);
        self.events.push(QuizEvent::QuestionReady {
            expression: q.expression().to_string(),
        });
        self.question = Some(q);
    }

    fn pick_emoji(&mut self, table: &[&'static str]) -> &'static str {
        self.rng.pick(table)
    }

    /// Install a known question (tests only).
    #[cfg(test)]
    pub(crate) fn set_question(&mut self, q: Question) {
        self.question = Some(q);
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u32) -> QuizEngine {
        let mut engine = QuizEngine::new(seed);
        engine.start();
        engine.drain_events().for_each(drop);
        engine
    }

    #[test]
    fn test_new_engine_is_idle_with_defaults() {
        let engine = QuizEngine::new(12345);

        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.remaining_secs(), ROUND_SECONDS);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        assert_eq!(
            engine.question().map(|q| q.expression()),
            Some(PLACEHOLDER_EXPRESSION)
        );
        assert!(!engine.countdown_active());
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_start_begins_session() {
        let mut engine = QuizEngine::new(1);
        assert!(engine.start());

        assert!(engine.is_running());
        assert_eq!(engine.remaining_secs(), 60);
        assert!(engine.countdown_active());
        assert_eq!(engine.session_id(), 1);

        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(events.len(), 1);
        match &events[0] {
            QuizEvent::QuestionReady { expression } => {
                assert_eq!(Some(expression.as_str()), engine.question().map(|q| q.expression()));
            }
            other => panic!("expected QuestionReady, got {other:?}"),
        }
    }

    #[test]
    fn test_double_start_keeps_single_countdown() {
        let mut engine = QuizEngine::new(1);
        engine.start();
        let generation = engine.countdown_generation();
        engine.advance_time(400);

        assert!(!engine.start());
        assert_eq!(engine.countdown_generation(), generation);

        // Only one tick per second of wall time.
        assert_eq!(engine.advance_time(600), 1);
        assert_eq!(engine.remaining_secs(), 59);
        assert_eq!(engine.advance_time(999), 0);
    }

    #[test]
    fn test_correct_answer_adds_bonus() {
        let mut engine = started(3);
        engine.set_question(Question::new("4 + 4", 8.0));

        let outcome = engine.submit_answer("8");
        assert_eq!(outcome, Some(AnswerOutcome::Correct { score: 10, gained: 10 }));
        assert_eq!(engine.score(), 10);

        let events: Vec<_> = engine.drain_events().collect();
        match events.as_slice() {
            [QuizEvent::AnswerCorrect { score, emoji }] => {
                assert_eq!(*score, 10);
                assert!(CELEBRATION_EMOJI.contains(emoji));
            }
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn test_bonus_depends_on_difficulty() {
        for (level, bonus) in [
            (Difficulty::Easy, 10),
            (Difficulty::Medium, 20),
            (Difficulty::Hard, 30),
        ] {
            let mut engine = started(9);
            engine.set_difficulty(level);
            engine.set_question(Question::new("1 + 1", 2.0));
            engine.submit_answer("2");
            assert_eq!(engine.score(), bonus);
        }
    }

    #[test]
    fn test_wrong_answer_keeps_score_and_reports_answer() {
        let mut engine = started(3);
        engine.set_question(Question::new("7 ÷ 3", 2.33));
        engine.submit_answer("2.33");
        engine.drain_events().for_each(drop);

        let outcome = engine.submit_answer("garbage");
        assert_eq!(outcome, Some(AnswerOutcome::Incorrect { correct_answer: 2.33 }));
        assert_eq!(engine.score(), 10);

        let event = engine.drain_events().next();
        match event {
            Some(QuizEvent::AnswerIncorrect { correct_answer, emoji }) => {
                assert_eq!(correct_answer, 2.33);
                assert!(COMMISERATION_EMOJI.contains(&emoji));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_submit_outside_session_is_silent() {
        let mut engine = QuizEngine::new(1);
        assert_eq!(engine.submit_answer("8"), None);
        assert_eq!(engine.score(), 0);
        assert!(engine.pending_events().is_empty());

        engine.start();
        engine.advance_time(ROUND_SECONDS * TICK_MS);
        assert_eq!(engine.phase(), Phase::Ended);
        engine.drain_events().for_each(drop);

        assert_eq!(engine.submit_answer("8"), None);
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_set_difficulty_while_idle_does_not_generate() {
        let mut engine = QuizEngine::new(1);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert!(engine.pending_events().is_empty());
        assert_eq!(
            engine.question().map(|q| q.expression()),
            Some(PLACEHOLDER_EXPRESSION)
        );

        // The next start uses the stored tier.
        engine.start();
        let terms = engine.question().unwrap().expression().split(' ').count();
        assert_eq!(terms, HARD_PROFILE.term_count * 2 - 1);
    }

    #[test]
    fn test_set_difficulty_while_running_regenerates() {
        let mut engine = started(1);
        engine.set_difficulty(Difficulty::Medium);

        let events: Vec<_> = engine.drain_events().collect();
        assert!(matches!(events.as_slice(), [QuizEvent::QuestionReady { .. }]));
        let terms = engine.question().unwrap().expression().split(' ').count();
        assert_eq!(terms, MEDIUM_PROFILE.term_count * 2 - 1);
    }

    #[test]
    fn test_advance_question_is_legal_when_idle() {
        let mut engine = QuizEngine::new(1);
        engine.advance_question();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(matches!(
            engine.pending_events(),
            [QuizEvent::QuestionReady { .. }]
        ));
    }

    #[test]
    fn test_tick_emits_warning_in_last_ten_seconds() {
        let mut engine = started(1);
        engine.advance_time(49 * TICK_MS);
        let events: Vec<_> = engine.drain_events().collect();
        assert_eq!(events.len(), 49);
        assert_eq!(events.last(), Some(&QuizEvent::time_tick(11)));
        assert!(!events.iter().any(QuizEvent::is_warning));

        engine.tick();
        assert_eq!(
            engine.drain_events().next(),
            Some(QuizEvent::TimeTick {
                remaining_secs: 10,
                warning: true
            })
        );
    }

    #[test]
    fn test_game_over_fires_exactly_once() {
        let mut engine = started(1);
        let fired = engine.advance_time(ROUND_SECONDS * TICK_MS + 5_000);
        assert_eq!(fired, ROUND_SECONDS);
        assert_eq!(engine.remaining_secs(), 0);
        assert_eq!(engine.phase(), Phase::Ended);
        assert!(!engine.countdown_active());

        let overs = engine
            .drain_events()
            .filter(|e| matches!(e, QuizEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);

        // A stale tick after the end changes nothing.
        assert!(!engine.tick());
        assert_eq!(engine.advance_time(10_000), 0);
        assert!(engine.pending_events().is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = started(1);
        engine.advance_time(ROUND_SECONDS * TICK_MS);
        assert_eq!(engine.phase(), Phase::Ended);

        assert!(engine.start());
        assert!(engine.is_running());
        assert_eq!(engine.remaining_secs(), ROUND_SECONDS);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.session_id(), 2);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut engine = started(1);
        engine.set_difficulty(Difficulty::Hard);
        engine.set_question(Question::new("1 + 1", 2.0));
        engine.submit_answer("2");
        engine.advance_time(3_000);
        engine.drain_events().for_each(drop);

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.remaining_secs(), ROUND_SECONDS);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        assert!(!engine.countdown_active());
        assert_eq!(
            engine.question().map(|q| q.expression()),
            Some(PLACEHOLDER_EXPRESSION)
        );
        assert_eq!(
            engine.drain_events().collect::<Vec<_>>(),
            vec![QuizEvent::reset_defaults()]
        );

        // Reset twice is harmless.
        engine.reset();
        assert_eq!(engine.advance_time(5_000), 0);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut engine = QuizEngine::new(1);
        assert!(engine.apply_action(QuizAction::Start, ""));
        assert!(!engine.apply_action(QuizAction::Start, ""));
        assert!(engine.apply_action(QuizAction::SetDifficulty(Difficulty::Medium), ""));
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert!(engine.apply_action(QuizAction::Submit, "not a number"));
        assert!(engine.apply_action(QuizAction::Reset, ""));
        assert!(!engine.apply_action(QuizAction::Submit, "1"));
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = QuizEngine::new(777);
        let mut b = QuizEngine::new(777);
        for _ in 0..20 {
            a.advance_question();
            b.advance_question();
            assert_eq!(a.question(), b.question());
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = started(1);
        engine.advance_time(2 * TICK_MS);
        let snap = engine.snapshot();

        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.remaining_secs, 58);
        assert_eq!(snap.difficulty, Difficulty::Easy);
        assert_eq!(Some(snap.expression.as_str()), engine.question().map(|q| q.expression()));
        assert!(!snap.warning());
    }

    #[test]
    fn test_until_next_tick_follows_countdown() {
        let mut engine = QuizEngine::new(1);
        assert_eq!(engine.until_next_tick_ms(), None);

        engine.start();
        assert_eq!(engine.until_next_tick_ms(), Some(TICK_MS));
        engine.advance_time(300);
        assert_eq!(engine.until_next_tick_ms(), Some(TICK_MS - 300));

        engine.advance_time(ROUND_SECONDS * TICK_MS);
        assert_eq!(engine.phase(), Phase::Ended);
        assert_eq!(engine.until_next_tick_ms(), None);
    }
}

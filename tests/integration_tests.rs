//! End-to-end quiz sessions through the public API.

use tui_quiz::app::App;
use tui_quiz::core::{format_answer, QuizEngine};
use tui_quiz::input::InputEvent;
use tui_quiz::types::{Difficulty, Phase, QuizAction, QuizEvent, ROUND_SECONDS};

fn correct_text(engine: &QuizEngine) -> String {
    format_answer(engine.question().unwrap().answer())
}

#[test]
fn test_full_easy_session() {
    let mut engine = QuizEngine::new(12345);
    assert!(engine.start());
    let events: Vec<QuizEvent> = engine.drain_events().collect();
    assert!(matches!(events.as_slice(), [QuizEvent::QuestionReady { .. }]));

    let answer = correct_text(&engine);
    let outcome = engine.submit_answer(&answer).unwrap();
    assert!(outcome.is_correct());
    assert_eq!(engine.score(), 10);

    engine.advance_question();
    assert_eq!(engine.score(), 10);
    engine.drain_events().for_each(drop);

    for _ in 0..ROUND_SECONDS {
        engine.advance_time(1_000);
    }
    assert_eq!(engine.phase(), Phase::Ended);
    assert_eq!(engine.remaining_secs(), 0);

    let events: Vec<QuizEvent> = engine.drain_events().collect();
    let game_overs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, QuizEvent::GameOver { .. }))
        .collect();
    assert_eq!(game_overs.len(), 1);
    assert_eq!(events.last(), Some(&QuizEvent::GameOver { final_score: 10 }));

    // Nothing fires after the session ended.
    assert_eq!(engine.advance_time(5_000), 0);
    assert!(engine.drain_events().next().is_none());
}

#[test]
fn test_reset_after_game_over() {
    let mut engine = QuizEngine::new(9);
    engine.set_difficulty(Difficulty::Medium);
    engine.start();
    engine.advance_time(ROUND_SECONDS * 1_000);
    assert_eq!(engine.phase(), Phase::Ended);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.remaining_secs(), ROUND_SECONDS);
    assert_eq!(engine.difficulty(), Difficulty::Easy);
    assert_eq!(engine.question().unwrap().expression(), "5 + 3");
    assert!(!engine.countdown_active());
}

#[test]
fn test_double_start_keeps_one_countdown() {
    let mut engine = QuizEngine::new(1);
    assert!(engine.start());
    let generation = engine.countdown_generation();
    engine.advance_time(500);
    assert!(!engine.start());
    assert_eq!(engine.countdown_generation(), generation);

    // One countdown: 1.5s total elapsed fires exactly one tick.
    assert_eq!(engine.advance_time(1_000), 1);
    assert_eq!(engine.remaining_secs(), ROUND_SECONDS - 1);
}

#[test]
fn test_score_never_decreases() {
    let mut engine = QuizEngine::new(77);
    engine.set_difficulty(Difficulty::Hard);
    engine.start();

    let mut last = 0;
    for i in 0..50 {
        let answer = if i % 3 == 0 {
            "not a number".to_string()
        } else {
            correct_text(&engine)
        };
        engine.submit_answer(&answer);
        assert!(engine.score() >= last);
        last = engine.score();
        engine.advance_question();
    }
    assert!(last > 0);
    assert_eq!(last % Difficulty::Hard.bonus(), 0);
}

#[test]
fn test_same_seed_same_questions() {
    let mut a = QuizEngine::new(4242);
    let mut b = QuizEngine::new(4242);
    a.start();
    b.start();
    for _ in 0..20 {
        assert_eq!(
            a.question().unwrap().expression(),
            b.question().unwrap().expression()
        );
        a.advance_question();
        b.advance_question();
    }
}

#[test]
fn test_app_session_through_inputs() {
    let mut app = App::new(QuizEngine::new(31), None);
    app.handle_input(InputEvent::Action(QuizAction::Start));
    assert_eq!(app.snapshot().phase, Phase::Running);

    for c in correct_text(app.engine()).chars() {
        assert!(app.handle_input(InputEvent::Insert(c)));
    }
    app.handle_input(InputEvent::Action(QuizAction::Submit));
    assert_eq!(app.snapshot().score, 10);
    assert_eq!(app.feedback().text, "Correct! 🎉");

    app.handle_input(InputEvent::Action(QuizAction::Next));
    assert_eq!(app.answer(), "");
    assert_eq!(app.snapshot().score, 10);

    assert_eq!(app.advance_time(50_000), 50);
    assert!(app.snapshot().warning());
    app.advance_time(10_000);
    assert_eq!(app.snapshot().phase, Phase::Ended);
    assert_eq!(app.feedback().text, "Game over! Final score: 10");
}

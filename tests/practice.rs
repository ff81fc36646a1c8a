// Native tests for the stroke-practice session: scoring, the rainbow palette
// and the Idle → Demo / Idle → Quiz → Evaluating → Idle transitions.

use hanzi_copybook::ai::{empty_payload_feedback, fallback_feedback};
use hanzi_copybook::practice::{
    PracticePhase, PracticeSession, QuizSummary, RAINBOW_PALETTE, quiz_score, rainbow_color,
};

#[test]
fn score_starts_at_hundred_and_floors_at_zero() {
    assert_eq!(quiz_score(0), 100);
    assert_eq!(quiz_score(1), 95);
    assert_eq!(quiz_score(20), 0);
    assert_eq!(quiz_score(21), 0);
    assert_eq!(quiz_score(u32::MAX), 0);
    for mistakes in 0..=20 {
        assert_eq!(quiz_score(mistakes), 100 - 5 * mistakes);
    }
}

#[test]
fn rainbow_palette_cycles_by_stroke_index() {
    for i in 0..30 {
        assert_eq!(rainbow_color(i), RAINBOW_PALETTE[i % RAINBOW_PALETTE.len()]);
    }
    // stroke 7 wraps back to the first color
    assert_eq!(rainbow_color(RAINBOW_PALETTE.len()), RAINBOW_PALETTE[0]);
}

#[test]
fn demo_clears_previous_quiz_result() {
    let mut session = PracticeSession::new('你');
    session.begin_quiz();
    let request = session.complete_quiz(&QuizSummary {
        total_mistakes: 3,
        mistakes_on_stroke: vec![(1, 3)],
    });
    assert_eq!(request.total_mistakes, 3);
    session.apply_feedback("再练练第二笔。".into());
    assert!(session.score().is_some());
    assert!(session.feedback().is_some());

    session.begin_demo();
    assert_eq!(session.phase(), PracticePhase::Demo);
    assert!(session.score().is_none());
    assert!(session.feedback().is_none());

    session.finish_demo();
    assert_eq!(session.phase(), PracticePhase::Idle);
}

#[test]
fn quiz_flow_reaches_idle_through_evaluating() {
    let mut session = PracticeSession::new('好');
    assert_eq!(session.phase(), PracticePhase::Idle);

    session.begin_quiz();
    assert_eq!(session.phase(), PracticePhase::Quiz);
    assert!(session.score().is_none());

    let summary = QuizSummary {
        total_mistakes: 4,
        mistakes_on_stroke: vec![(5, 1), (0, 2), (2, 0), (3, 1)],
    };
    let request = session.complete_quiz(&summary);
    assert_eq!(session.phase(), PracticePhase::Evaluating);
    assert_eq!(session.score(), Some(80));
    assert_eq!(request.character, '好');
    assert_eq!(request.total_mistakes, 4);
    // only strokes with at least one mistake, ascending
    assert_eq!(request.missed_strokes, vec![0, 3, 5]);

    session.apply_feedback("注意第一笔是横。".into());
    assert_eq!(session.phase(), PracticePhase::Idle);
    assert_eq!(session.feedback(), Some("注意第一笔是横。"));
    assert_eq!(session.score(), Some(80));
}

#[test]
fn perfect_quiz_scores_hundred_with_no_missed_strokes() {
    let mut session = PracticeSession::new('山');
    session.begin_quiz();
    let request = session.complete_quiz(&QuizSummary::default());
    assert_eq!(session.score(), Some(100));
    assert!(request.missed_strokes.is_empty());
}

#[test]
fn stroke_count_survives_transitions() {
    let mut session = PracticeSession::new('水');
    session.set_stroke_count(4);
    session.begin_demo();
    session.finish_demo();
    session.begin_quiz();
    assert_eq!(session.stroke_count(), 4);
}

#[test]
fn rainbow_defaults_on_and_toggles() {
    let mut session = PracticeSession::new('火');
    assert!(session.rainbow());
    session.toggle_rainbow();
    assert!(!session.rainbow());
    session.toggle_rainbow();
    assert!(session.rainbow());
}

#[test]
fn feedback_fallbacks_key_on_mistake_free_runs() {
    assert_ne!(fallback_feedback(0), fallback_feedback(1));
    assert_eq!(fallback_feedback(1), fallback_feedback(7));
    assert_ne!(empty_payload_feedback(0), empty_payload_feedback(2));
    // the two failure paths use distinct strings
    assert_ne!(fallback_feedback(0), empty_payload_feedback(0));
}

use std::time::Duration;

use crate::domain::Outcome;
use crate::session::test_session_helpers::{alphabet_session, play_round, scheduled};
use crate::session::{DeferredKind, PlayPrompt, RoundState, SessionEvent, SessionTransition};

#[test]
fn correct_round_schedules_advance_then_reset() {
    let mut session = alphabet_session();
    let step = play_round(&mut session, Some("A"));

    let kinds: Vec<DeferredKind> = step.scheduled.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![DeferredKind::AdvanceTarget, DeferredKind::ResetToIdle]
    );
    let advance = scheduled(&step, DeferredKind::AdvanceTarget).unwrap();
    let reset = scheduled(&step, DeferredKind::ResetToIdle).unwrap();
    assert_eq!(advance.delay, Duration::from_millis(300));
    assert_eq!(reset.delay, Duration::from_millis(1500));
    assert!(advance.delay < reset.delay);
    assert_eq!(advance.generation, 1);
    assert_eq!(reset.generation, 1);
}

#[test]
fn incorrect_and_inconclusive_rounds_only_schedule_reset() {
    for prediction in ["M", ""] {
        let mut session = alphabet_session();
        let step = play_round(&mut session, Some(prediction));
        let kinds: Vec<DeferredKind> = step.scheduled.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![DeferredKind::ResetToIdle], "prediction {prediction:?}");
    }
}

#[test]
fn advance_moves_target_but_stays_finished() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("A"));
    let advance = scheduled(&finish, DeferredKind::AdvanceTarget).unwrap();

    let step = session.apply(SessionEvent::Deferred(advance));
    assert_eq!(session.target().name(), "B");
    assert_eq!(session.state(), RoundState::Finished);
    assert_eq!(session.last_outcome(), Some(Outcome::Correct));
    assert_eq!(session.play_prompt(), PlayPrompt::CheckSign);
    assert_eq!(
        step.transitions,
        vec![SessionTransition::TargetChanged {
            from: "A".to_string(),
            to: "B".to_string()
        }]
    );
}

#[test]
fn advance_is_applied_at_most_once() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("A"));
    let advance = scheduled(&finish, DeferredKind::AdvanceTarget).unwrap();
    session.apply(SessionEvent::Deferred(advance));
    session.apply(SessionEvent::Deferred(advance));
    assert_eq!(session.target().name(), "B");
}

#[test]
fn reset_returns_to_idle() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("M"));
    let reset = scheduled(&finish, DeferredKind::ResetToIdle).unwrap();

    let step = session.apply(SessionEvent::Deferred(reset));
    assert_eq!(session.state(), RoundState::NotPlaying);
    assert_eq!(session.countdown_remaining(), session.countdown_total());
    assert_eq!(session.last_outcome(), None);
    assert_eq!(session.target().name(), "A");
    assert!(step.transitions.contains(&SessionTransition::SessionReset));
}

#[test]
fn full_correct_round_walkthrough() {
    let mut session = alphabet_session();
    session.apply(SessionEvent::Toggle);
    session.apply(SessionEvent::Prediction("A".to_string()));
    let mut finish = None;
    for _ in 0..3 {
        finish = Some(session.apply(SessionEvent::Tick));
    }
    let finish = finish.unwrap();
    assert_eq!(session.state(), RoundState::Finished);
    assert_eq!(session.last_outcome(), Some(Outcome::Correct));

    for effect in finish.scheduled {
        session.apply(SessionEvent::Deferred(effect));
    }
    assert_eq!(session.target().name(), "B");
    assert_eq!(session.state(), RoundState::NotPlaying);
    assert_eq!(session.countdown_remaining(), 3);
    assert_eq!(session.last_outcome(), None);
}

#[test]
fn toggle_after_advance_does_not_skip_a_symbol() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("A"));
    let advance = scheduled(&finish, DeferredKind::AdvanceTarget).unwrap();
    session.apply(SessionEvent::Deferred(advance));
    assert_eq!(session.target().name(), "B");

    session.apply(SessionEvent::Toggle);
    assert_eq!(session.state(), RoundState::Playing);
    assert_eq!(session.target().name(), "B");
}

#[test]
fn stale_reset_after_toggle_is_a_no_op() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("M"));
    let reset = scheduled(&finish, DeferredKind::ResetToIdle).unwrap();

    // The learner restarts before the reset fires.
    session.apply(SessionEvent::Toggle);
    assert_eq!(session.state(), RoundState::Playing);

    let step = session.apply(SessionEvent::Deferred(reset));
    assert_eq!(session.state(), RoundState::Playing);
    assert_eq!(session.countdown_remaining(), 3);
    assert!(step.transitions.is_empty());
}

#[test]
fn stale_effects_from_an_earlier_finish_are_dropped() {
    let mut session = alphabet_session();
    let first = play_round(&mut session, Some("A"));
    let first_advance = scheduled(&first, DeferredKind::AdvanceTarget).unwrap();
    let first_reset = scheduled(&first, DeferredKind::ResetToIdle).unwrap();

    // Restart (target A -> B) and finish a second round on B.
    session.apply(SessionEvent::Toggle);
    session.apply(SessionEvent::Prediction("B".to_string()));
    for _ in 0..3 {
        session.apply(SessionEvent::Tick);
    }
    assert_eq!(session.state(), RoundState::Finished);
    assert_eq!(session.generation(), 2);
    assert_eq!(session.target().name(), "B");

    // Timers from generation 1 fire late.
    session.apply(SessionEvent::Deferred(first_advance));
    session.apply(SessionEvent::Deferred(first_reset));
    assert_eq!(session.target().name(), "B");
    assert_eq!(session.state(), RoundState::Finished);
    assert_eq!(session.last_outcome(), Some(Outcome::Correct));
}

#[test]
fn stale_advance_after_reset_is_a_no_op() {
    let mut session = alphabet_session();
    let finish = play_round(&mut session, Some("A"));
    let advance = scheduled(&finish, DeferredKind::AdvanceTarget).unwrap();
    let reset = scheduled(&finish, DeferredKind::ResetToIdle).unwrap();

    // Out-of-order delivery: reset first, then the advance arrives.
    session.apply(SessionEvent::Deferred(reset));
    session.apply(SessionEvent::Deferred(advance));
    assert_eq!(session.state(), RoundState::NotPlaying);
    assert_eq!(session.target().name(), "A");
}

#[test]
fn finish_on_last_symbol_wraps_to_first() {
    let mut session = alphabet_session().with_target("Z");
    let finish = play_round(&mut session, Some("z"));
    let advance = scheduled(&finish, DeferredKind::AdvanceTarget).unwrap();
    session.apply(SessionEvent::Deferred(advance));
    assert_eq!(session.target().name(), "A");
}

mod common;

use std::collections::HashSet;

use nature_explorer::quiz::{Advance, Phase, QUESTION_COUNT, Selection};
use nature_explorer::{QuestionBank, QuizError};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn three_question_bank_gives_three_question_session_that_finishes() {
    let bank = common::bank(3);
    let mut session = bank.start().unwrap();

    assert_eq!(session.len(), 3);
    for _ in 0..2 {
        session.select("A").unwrap();
        assert_eq!(session.advance().unwrap(), Advance::NextQuestion);
    }
    session.select("A").unwrap();
    assert_eq!(session.advance().unwrap(), Advance::Finished);

    assert!(session.is_finished());
    assert_eq!(session.score(), 0);
    assert_eq!(session.percentage(), 0);
}

#[test]
fn correct_answer_scores_and_later_selection_is_ignored() {
    let bank = QuestionBank::new(vec![common::question(1, &["A", "B", "C"], "B")]).unwrap();
    let mut session = bank.start().unwrap();

    assert_eq!(session.select("B").unwrap(), Selection::Correct);
    assert_eq!(session.score(), 1);
    assert!(session.is_answered());

    assert_eq!(session.select("C").unwrap(), Selection::Ignored);
    assert_eq!(session.score(), 1);
    assert_eq!(session.selected_option(), Some("B"));
}

#[test]
fn empty_bank_cannot_start() {
    let bank = QuestionBank::new(vec![]).unwrap();
    assert_eq!(bank.start().unwrap_err(), QuizError::EmptyBank);
}

#[test]
fn draws_are_bounded_and_never_repeat() {
    let mut rng = StdRng::seed_from_u64(99);

    for size in [1, 2, 9, 10, 11, 40] {
        let bank = common::bank(size);
        for _ in 0..20 {
            let session = bank.start_with_rng(&mut rng).unwrap();
            let ids: HashSet<u32> = session.questions().iter().map(|q| q.id).collect();

            assert_eq!(session.len(), QUESTION_COUNT.min(size as usize));
            assert_eq!(ids.len(), session.len());
        }
    }
}

#[test]
fn score_stays_in_bounds_and_never_decreases() {
    let bank = common::bank(25);
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = bank.start_with_rng(&mut rng).unwrap();
    let options = ["A", "B", "C"];
    let mut previous = 0;
    let mut turn = 0;

    while session.phase() != Phase::Finished {
        let pick = options[turn % options.len()];
        session.select(pick).unwrap();
        // A second pick on the same question never changes the score.
        session.select("B").unwrap();

        assert!(session.score() >= previous);
        assert!(session.score() <= session.len());
        previous = session.score();

        session.advance().unwrap();
        turn += 1;
    }

    assert_eq!(turn, QUESTION_COUNT);
    // Every third pick was "B".
    assert_eq!(session.score(), 3);
}

#[test]
fn reset_draws_a_fresh_session() {
    let bank = common::bank(40);
    let mut rng = StdRng::seed_from_u64(11);

    let mut session = bank.start_with_rng(&mut rng).unwrap();
    session.select("B").unwrap();
    session.advance().unwrap();

    let replacement = bank.start_with_rng(&mut rng).unwrap();
    assert_eq!(replacement.current_index(), 0);
    assert_eq!(replacement.score(), 0);
    assert_eq!(replacement.phase(), Phase::Unanswered);

    let first: Vec<u32> = session.questions().iter().map(|q| q.id).collect();
    let second: Vec<u32> = replacement.questions().iter().map(|q| q.id).collect();
    assert_ne!(first, second);
}

#[test]
fn advancing_unanswered_question_is_refused() {
    let bank = common::bank(2);
    let mut session = bank.start().unwrap();

    assert_eq!(session.advance().unwrap_err(), QuizError::NotAnswered);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.phase(), Phase::Unanswered);
}

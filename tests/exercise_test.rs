//! Tests for challenges, quiz questions and division facts

use std::collections::HashSet;

use rstest::rstest;

use geotime::application::facts::{facts_for, key_events, DEFAULT_FACTS};
use geotime::application::{
    chronology_challenge, default_placement_targets, generate_question, placement_challenge,
    random_question, ApplicationError, Difficulty, QuestionKind,
};
use geotime::domain::catalog;
use geotime::util::testing::init_test_setup;
use geotime::{matches, Rank, Sampler};

// ============================================================
// Challenges
// ============================================================

#[rstest]
#[case(Difficulty::Easy, 3, Some(Rank::Era))]
#[case(Difficulty::Medium, 5, Some(Rank::Period))]
#[case(Difficulty::Hard, 7, None)]
fn given_difficulty_when_drawing_chronology_challenge_then_size_and_rank_match(
    #[case] difficulty: Difficulty,
    #[case] expected_len: usize,
    #[case] rank: Option<Rank>,
) {
    init_test_setup();
    let mut sampler = Sampler::seeded(1);

    let challenge = chronology_challenge(&mut sampler, catalog(), difficulty);

    assert_eq!(challenge.len(), expected_len);
    let unique: HashSet<&str> = challenge.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(unique.len(), expected_len);
    if let Some(rank) = rank {
        assert!(challenge.iter().all(|d| d.rank == rank));
    }
}

#[test]
fn given_catalog_when_listing_default_targets_then_phanerozoic_eras() {
    let targets: Vec<&str> = default_placement_targets(catalog())
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert_eq!(targets, vec!["paleozoic", "mesozoic", "cenozoic"]);
}

#[test]
fn given_targets_when_drawing_placement_then_item_matches_one_target() {
    let targets = ["paleozoic", "mesozoic", "cenozoic"];
    let mut sampler = Sampler::seeded(9);

    for _ in 0..50 {
        let item = placement_challenge(&mut sampler, catalog(), &targets).unwrap();
        assert_eq!(item.rank, Rank::Period);
        assert!(targets.iter().any(|t| matches(catalog(), &item.id, t)));
    }
}

#[test]
fn given_targets_without_children_when_drawing_placement_then_errors() {
    let mut sampler = Sampler::seeded(9);

    let result = placement_challenge(&mut sampler, catalog(), &["jurassic", "atlantis"]);

    assert!(matches!(result, Err(ApplicationError::NotEnoughCandidates { .. })));
}

// ============================================================
// Quiz
// ============================================================

#[rstest]
#[case(QuestionKind::Chronology, 2)]
#[case(QuestionKind::ParentDivision, 4)]
#[case(QuestionKind::Definition, 4)]
fn given_kind_when_generating_question_then_answer_is_one_of_fixed_options(
    #[case] kind: QuestionKind,
    #[case] option_count: usize,
) {
    for seed in 0..25 {
        let mut sampler = Sampler::seeded(seed);

        let question = generate_question(&mut sampler, catalog(), kind).unwrap();

        assert_eq!(question.kind, kind);
        assert_eq!(question.options.len(), option_count, "seed {seed}");
        assert!(question.answer_index().is_some());
        assert!(question.is_correct(&question.answer));
        let unique: HashSet<&String> = question.options.iter().collect();
        assert_eq!(unique.len(), question.options.len());
    }
}

#[test]
fn given_chronology_question_then_answer_is_the_older_period() {
    for seed in 0..25 {
        let mut sampler = Sampler::seeded(seed);
        let question = generate_question(&mut sampler, catalog(), QuestionKind::Chronology).unwrap();

        let start = |name: &str| {
            catalog()
                .all()
                .iter()
                .find(|d| d.name == name)
                .map(|d| d.start_mya)
                .unwrap()
        };
        let other = question.options.iter().find(|o| **o != question.answer).unwrap();
        assert!(start(&question.answer) > start(other));
    }
}

#[test]
fn given_parent_question_then_answer_is_an_era() {
    for seed in 0..25 {
        let mut sampler = Sampler::seeded(seed);
        let question =
            generate_question(&mut sampler, catalog(), QuestionKind::ParentDivision).unwrap();

        assert!(catalog()
            .by_rank(Rank::Era)
            .any(|era| era.name == question.answer));
        assert!(question.options.iter().any(|o| o == "Precambrian"));
    }
}

#[test]
fn given_duration_question_then_answer_parses_and_distractors_differ() {
    for seed in 0..25 {
        let mut sampler = Sampler::seeded(seed);
        let question = generate_question(&mut sampler, catalog(), QuestionKind::Duration).unwrap();

        let answer: f64 = question.answer.parse().unwrap();
        assert!(answer >= 1.0);
        assert!(question.options.len() >= 2);
        assert!(question.answer_index().is_some());
    }
}

#[test]
fn given_sampler_when_drawing_random_questions_then_all_kinds_occur() {
    let mut sampler = Sampler::seeded(77);
    let mut kinds = HashSet::new();

    for _ in 0..100 {
        let question = random_question(&mut sampler, catalog()).unwrap();
        assert!(question.answer_index().is_some());
        kinds.insert(question.kind.to_string());
    }

    assert_eq!(kinds.len(), QuestionKind::ALL.len());
}

// ============================================================
// Facts
// ============================================================

#[test]
fn given_every_division_then_facts_are_available() {
    for d in catalog().all() {
        assert!(!facts_for(&d.id).is_empty(), "{}", d.id);
    }
}

#[test]
fn given_unknown_id_when_looking_up_facts_then_defaults() {
    assert_eq!(facts_for("atlantis"), DEFAULT_FACTS);
    assert!(key_events("atlantis").is_empty());
    assert!(key_events("jurassic").contains(&"First birds"));
}

//! Tests for random selection without replacement

use std::collections::{HashMap, HashSet};

use rstest::rstest;

use geotime::domain::catalog;
use geotime::util::testing::init_test_setup;
use geotime::{Rank, Sampler};

#[rstest]
#[case(0, None, 0)]
#[case(3, None, 3)]
#[case(5, Some(Rank::Period), 5)]
#[case(100, Some(Rank::Era), 3)]
#[case(100, None, 27)]
#[case(2, Some(Rank::Age), 0)]
fn given_count_and_rank_when_sampling_then_size_is_bounded(
    #[case] count: usize,
    #[case] rank: Option<Rank>,
    #[case] expected: usize,
) {
    init_test_setup();
    let mut sampler = Sampler::seeded(7);

    let drawn = sampler.sample(catalog(), count, rank);

    assert_eq!(drawn.len(), expected);
    if let Some(rank) = rank {
        assert!(drawn.iter().all(|d| d.rank == rank));
    }
}

#[test]
fn given_many_draws_when_sampling_then_never_duplicates() {
    let mut sampler = Sampler::seeded(11);
    for _ in 0..200 {
        let drawn = sampler.sample(catalog(), 10, None);
        let unique: HashSet<&str> = drawn.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(unique.len(), drawn.len());
    }
}

#[test]
fn given_count_above_candidates_when_sampling_then_returns_whole_filtered_set() {
    let mut sampler = Sampler::seeded(3);

    let drawn = sampler.sample(catalog(), 50, Some(Rank::Epoch));

    let drawn: HashSet<&str> = drawn.iter().map(|d| d.id.as_str()).collect();
    let expected: HashSet<&str> = catalog()
        .by_rank(Rank::Epoch)
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(drawn, expected);
}

#[test]
fn given_same_seed_when_sampling_then_same_draws() {
    let mut first = Sampler::seeded(42);
    let mut second = Sampler::seeded(42);

    for _ in 0..10 {
        let a: Vec<&str> = first.sample(catalog(), 5, None).into_iter().map(|d| d.id.as_str()).collect();
        let b: Vec<&str> = second.sample(catalog(), 5, None).into_iter().map(|d| d.id.as_str()).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn given_many_single_draws_when_sampling_then_each_candidate_is_picked_evenly() {
    let mut sampler = Sampler::seeded(2024);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..3000 {
        let drawn = sampler.sample(catalog(), 1, Some(Rank::Era));
        *counts.entry(drawn[0].id.clone()).or_default() += 1;
    }

    assert_eq!(counts.len(), 3);
    for (id, n) in counts {
        assert!((800..=1200).contains(&n), "{id} drawn {n} times");
    }
}

#[test]
fn given_predicate_when_sampling_where_then_only_matching_divisions() {
    let mut sampler = Sampler::seeded(5);

    let drawn = sampler.sample_where(catalog(), 10, |d| d.parent_id.as_deref() == Some("paleozoic"));

    assert_eq!(drawn.len(), 6);
    assert!(drawn.iter().all(|d| d.parent_id.as_deref() == Some("paleozoic")));
}

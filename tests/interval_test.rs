//! Tests for temporal range and overlap queries

use rstest::rstest;

use geotime::domain::catalog;
use geotime::util::testing::init_test_setup;
use geotime::Rank;

fn period_ids(start: f64, end: f64) -> Vec<String> {
    catalog()
        .periods_in_range(start, end)
        .into_iter()
        .filter(|d| d.rank == Rank::Period)
        .map(|d| d.id.clone())
        .collect()
}

#[test]
fn given_early_paleozoic_range_when_querying_then_periods_touching_it_are_returned() {
    init_test_setup();

    let ids = period_ids(550.0, 400.0);

    assert_eq!(ids, vec!["cambrian", "ordovician", "silurian", "devonian"]);
    assert!(!ids.contains(&"carboniferous".to_string()));
}

#[test]
fn given_range_when_querying_then_coarser_ancestors_are_included() {
    let all: Vec<&str> = catalog()
        .periods_in_range(550.0, 400.0)
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert!(all.contains(&"phanerozoic"));
    assert!(all.contains(&"proterozoic"));
    assert!(all.contains(&"paleozoic"));
    assert!(!all.contains(&"mesozoic"));
}

#[test]
fn given_reversed_bounds_when_querying_then_same_result() {
    assert_eq!(period_ids(400.0, 550.0), period_ids(550.0, 400.0));
}

#[rstest]
#[case::touching_start(201.3, 201.3, "jurassic")]
#[case::touching_end(145.0, 145.0, "jurassic")]
#[case::inside(170.0, 160.0, "jurassic")]
fn given_range_touching_division_when_querying_then_included(
    #[case] start: f64,
    #[case] end: f64,
    #[case] expected: &str,
) {
    assert!(period_ids(start, end).contains(&expected.to_string()));
}

#[test]
fn given_range_before_all_divisions_when_querying_then_empty() {
    assert!(catalog().periods_in_range(6000.0, 5000.0).is_empty());
}

#[test]
fn given_every_pair_when_checking_overlap_then_relation_is_symmetric() {
    let catalog = catalog();
    for a in catalog.all() {
        let of_a = catalog.overlapping_with(&a.id);
        for b in catalog.all() {
            let b_in_a = of_a.iter().any(|d| d.id == b.id);
            let a_in_b = catalog.overlapping_with(&b.id).iter().any(|d| d.id == a.id);
            assert_eq!(b_in_a, a_in_b, "{} / {}", a.id, b.id);
        }
    }
}

#[test]
fn given_division_when_listing_overlaps_then_self_excluded_and_neighbours_touch() {
    let overlaps: Vec<&str> = catalog()
        .overlapping_with("jurassic")
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert!(!overlaps.contains(&"jurassic"));
    assert!(overlaps.contains(&"triassic"));
    assert!(overlaps.contains(&"cretaceous"));
    assert!(overlaps.contains(&"mesozoic"));
    assert!(!overlaps.contains(&"permian"));
}

#[test]
fn given_unknown_id_when_listing_overlaps_then_empty() {
    assert!(catalog().overlapping_with("atlantis").is_empty());
}

#[test]
fn given_instant_when_listing_divisions_at_then_coarsest_first() {
    let at: Vec<&str> = catalog()
        .divisions_at(170.0)
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert_eq!(at, vec!["phanerozoic", "mesozoic", "jurassic"]);
}

//! Tests for chronological order validation

use rstest::rstest;

use geotime::application::{validate_order_ids, ApplicationError};
use geotime::domain::catalog;
use geotime::util::testing::division;
use geotime::{canonical_order, is_chronological, Rank, TimeDivision};

fn resolve(ids: &[&str]) -> Vec<&'static TimeDivision> {
    ids.iter().map(|id| catalog().lookup(id).unwrap()).collect()
}

#[rstest]
#[case::oldest_first(&["cambrian", "ordovician", "silurian"], true)]
#[case::swapped(&["ordovician", "cambrian", "silurian"], false)]
#[case::youngest_first(&["silurian", "ordovician", "cambrian"], false)]
#[case::mixed_ranks(&["phanerozoic", "paleocene", "holocene"], true)]
#[case::single(&["jurassic"], true)]
#[case::empty(&[], true)]
fn given_sequence_when_checking_order_then_expected(#[case] ids: &[&str], #[case] expected: bool) {
    let divisions = resolve(ids);

    assert_eq!(is_chronological(&divisions), expected);
}

#[test]
fn given_shuffled_divisions_when_canonical_order_then_oldest_first() {
    let divisions = resolve(&["cretaceous", "cambrian", "jurassic"]);

    let ordered: Vec<&str> = canonical_order(&divisions)
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert_eq!(ordered, vec!["cambrian", "jurassic", "cretaceous"]);
}

#[test]
fn given_canonical_order_when_checking_then_always_chronological() {
    let divisions = resolve(&["holocene", "hadean", "triassic", "eocene", "archaean"]);

    let ordered = canonical_order(&divisions);

    assert!(is_chronological(&ordered));
}

#[test]
fn given_equal_starts_when_ordering_then_lower_id_comes_first() {
    let a = division("alpha", Rank::Era, 100.0, 50.0, None);
    let b = division("beta", Rank::Period, 100.0, 90.0, None);

    assert!(is_chronological(&[a.clone(), b.clone()]));
    assert!(!is_chronological(&[b.clone(), a.clone()]));
    let reversed = [b, a];
    let ordered: Vec<&str> = canonical_order(&reversed)
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(ordered, vec!["alpha", "beta"]);
}

#[test]
fn given_catalog_periods_sharing_start_when_ordering_then_id_breaks_tie() {
    // The Phanerozoic, Paleozoic and Cambrian all start at 541 Mya
    let divisions = resolve(&["phanerozoic", "paleozoic", "cambrian"]);

    let ordered: Vec<&str> = canonical_order(&divisions)
        .into_iter()
        .map(|d| d.id.as_str())
        .collect();

    assert_eq!(ordered, vec!["cambrian", "paleozoic", "phanerozoic"]);
}

#[test]
fn given_ids_when_validating_then_resolves_and_checks() {
    assert!(validate_order_ids(catalog(), &["triassic", "jurassic"]).unwrap());
    assert!(!validate_order_ids(catalog(), &["jurassic", "triassic"]).unwrap());
}

#[test]
fn given_unknown_id_when_validating_then_errors() {
    let result = validate_order_ids(catalog(), &["triassic", "atlantis"]);

    assert!(matches!(result, Err(ApplicationError::UnknownDivision(id)) if id == "atlantis"));
}

//! Chronological order validation.

use std::borrow::Borrow;
use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Catalog, TimeDivision};

/// Oldest first: `start_mya` descending, ties broken by ascending id.
pub fn chronological_cmp(a: &TimeDivision, b: &TimeDivision) -> Ordering {
    b.start_mya
        .total_cmp(&a.start_mya)
        .then_with(|| a.id.cmp(&b.id))
}

/// The same divisions sorted into canonical chronological order.
pub fn canonical_order<D: Borrow<TimeDivision>>(divisions: &[D]) -> Vec<&TimeDivision> {
    divisions
        .iter()
        .map(<D as Borrow<TimeDivision>>::borrow)
        .sorted_by(|a, b| chronological_cmp(a, b))
        .collect()
}

/// True iff `divisions` is already in canonical order, compared by id.
#[instrument(level = "debug", skip(divisions), fields(len = divisions.len()))]
pub fn is_chronological<D: Borrow<TimeDivision>>(divisions: &[D]) -> bool {
    let canonical = canonical_order(divisions);
    let ok = divisions
        .iter()
        .map(<D as Borrow<TimeDivision>>::borrow)
        .zip(&canonical)
        .all(|(given, expected)| given.id == expected.id);
    debug!(ok, "order checked");
    ok
}

/// Resolve `ids` against the catalog and validate their order.
pub fn validate_order_ids<S: AsRef<str>>(catalog: &Catalog, ids: &[S]) -> ApplicationResult<bool> {
    let divisions = resolve_all(catalog, ids)?;
    Ok(is_chronological(&divisions))
}

pub(crate) fn resolve_all<'c, S: AsRef<str>>(
    catalog: &'c Catalog,
    ids: &[S],
) -> ApplicationResult<Vec<&'c TimeDivision>> {
    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            catalog
                .lookup(id)
                .ok_or_else(|| ApplicationError::UnknownDivision(id.to_string()))
        })
        .collect()
}

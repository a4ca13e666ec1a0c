//! Checks a learner's placement of a division under a claimed parent.

use tracing::instrument;

use crate::domain::Catalog;

/// Outcome of placing `item` under `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `target` is the direct parent
    Correct,
    /// `target` is a higher ancestor; still wrong, the exercise asks for the parent
    Ancestor,
    Wrong,
    UnknownItem,
}

/// True iff `target_id` is the direct parent of `item_id`.
///
/// Single-level only: a grandparent does not match. Unknown items and roots
/// yield `false`.
pub fn matches(catalog: &Catalog, item_id: &str, target_id: &str) -> bool {
    catalog
        .lookup(item_id)
        .and_then(|item| catalog.parent_of(item))
        .is_some_and(|parent| parent.id == target_id)
}

#[instrument(level = "debug", skip(catalog))]
pub fn classify_placement(catalog: &Catalog, item_id: &str, target_id: &str) -> Placement {
    let Some(item) = catalog.lookup(item_id) else {
        return Placement::UnknownItem;
    };
    if matches(catalog, item_id, target_id) {
        Placement::Correct
    } else if catalog.ancestors_of(item).iter().any(|a| a.id == target_id) {
        Placement::Ancestor
    } else {
        Placement::Wrong
    }
}

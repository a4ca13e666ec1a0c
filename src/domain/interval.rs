//! Temporal range queries over the catalog.

use tracing::instrument;

use crate::domain::{Catalog, Interval, TimeDivision};

impl Catalog {
    /// Every division whose interval intersects the range `[range_end, range_start]`.
    ///
    /// Bounds may be given in either order. Endpoints are inclusive, so a
    /// division that merely touches the range is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn periods_in_range(&self, range_start: f64, range_end: f64) -> Vec<&TimeDivision> {
        let range = Interval::new(range_start, range_end);
        self.all()
            .iter()
            .filter(|d| d.interval().intersects(&range))
            .collect()
    }

    /// Every other division intersecting `division_id`; empty for unknown ids.
    ///
    /// Symmetric: `a` is in `overlapping_with(b)` iff `b` is in `overlapping_with(a)`.
    #[instrument(level = "debug", skip(self))]
    pub fn overlapping_with(&self, division_id: &str) -> Vec<&TimeDivision> {
        let Some(target) = self.lookup(division_id) else {
            return Vec::new();
        };
        let interval = target.interval();
        self.all()
            .iter()
            .filter(|d| d.id != target.id && d.interval().intersects(&interval))
            .collect()
    }

    /// Divisions whose interval contains the instant `mya`, coarsest first.
    pub fn divisions_at(&self, mya: f64) -> Vec<&TimeDivision> {
        let mut hits: Vec<&TimeDivision> = self
            .all()
            .iter()
            .filter(|d| d.interval().contains_instant(mya))
            .collect();
        hits.sort_by_key(|d| d.rank);
        hits
    }
}

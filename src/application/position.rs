//! Maps absolute times onto a 0–100 proportional timeline.

use crate::domain::{Catalog, TimeDivision};

/// Linear scale with the oldest division at 0 % and the present at 100 %.
///
/// Values are not clamped: a forward-looking division ends slightly past 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineScale {
    max_reference_time: f64,
}

impl TimelineScale {
    pub fn new(max_reference_time: f64) -> Self {
        // Guaranteed for catalogs, see `DomainError::OriginNotInPast`.
        debug_assert!(max_reference_time > 0.0, "timeline origin must be in the past");
        Self { max_reference_time }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.max_reference_time())
    }

    pub fn max_reference_time(&self) -> f64 {
        self.max_reference_time
    }

    pub fn position_of(&self, mya: f64) -> f64 {
        (self.max_reference_time - mya) / self.max_reference_time * 100.0
    }

    pub fn width_of(&self, start_mya: f64, end_mya: f64) -> f64 {
        (start_mya - end_mya) / self.max_reference_time * 100.0
    }

    /// `(left, width)` of a division on the timeline.
    pub fn span_of(&self, division: &TimeDivision) -> (f64, f64) {
        (
            self.position_of(division.start_mya),
            self.width_of(division.start_mya, division.end_mya),
        )
    }
}

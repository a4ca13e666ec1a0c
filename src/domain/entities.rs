//! Domain entities: core data structures

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Coarseness level of a time division, coarsest first.
///
/// The derived ordering follows declaration order, so `Rank::Eon < Rank::Era`
/// reads as "eon is coarser than era".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Eon,
    Era,
    Period,
    Epoch,
    Age,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Eon => "eon",
            Rank::Era => "era",
            Rank::Period => "period",
            Rank::Epoch => "epoch",
            Rank::Age => "age",
        }
    }

    /// True if `self` sits strictly above `other` in the hierarchy.
    pub fn is_coarser_than(&self, other: Rank) -> bool {
        *self < other
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time span in millions of years before present.
///
/// Time runs backward, so `start >= end`: the interval is `[end, start]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Builds an interval, swapping the bounds if they were given present-first.
    pub fn new(start: f64, end: f64) -> Self {
        if start >= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Closed-interval intersection: `[a.end, a.start]` meets `[b.end, b.start]`
    /// iff `a.start >= b.end && b.start >= a.end`. Touching endpoints count.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.start >= other.end && other.start >= self.end
    }

    /// True if `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Interval) -> bool {
        other.start <= self.start && other.end >= self.end
    }

    pub fn contains_instant(&self, mya: f64) -> bool {
        mya <= self.start && mya >= self.end
    }

    pub fn span(&self) -> f64 {
        self.start - self.end
    }
}

/// One named division of the geologic time scale.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDivision {
    /// Lowercase primary key, e.g. "jurassic"
    pub id: String,
    /// Display label
    pub name: String,
    pub rank: Rank,
    /// Begin of the division (older, larger)
    pub start_mya: f64,
    /// End of the division (younger, smaller); negative for a future division
    pub end_mya: f64,
    /// Direct parent; `None` only for eons
    pub parent_id: Option<String>,
    /// Presentation hint, ignored by all queries
    pub color: Option<String>,
}

impl TimeDivision {
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start_mya,
            end: self.end_mya,
        }
    }

    /// Length of the division in millions of years.
    pub fn duration(&self) -> f64 {
        self.interval().span()
    }

    /// A speculative division reaching past the present: `end < 0 <= start`.
    pub fn is_forward_looking(&self) -> bool {
        self.end_mya < 0.0 && self.start_mya >= 0.0
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for TimeDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}–{} Mya)",
            self.name, self.rank, self.start_mya, self.end_mya
        )
    }
}

/// Human readable duration: thousands of years below 0.01 Myr, millions otherwise.
pub fn format_duration(myr: f64) -> String {
    if myr < 0.01 {
        format!("{:.1} thousand years", myr * 1000.0)
    } else {
        format!("{:.2} million years", myr)
    }
}

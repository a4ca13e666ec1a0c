//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Rank;

/// Catalog invariant violations detected while building a [`Catalog`](crate::domain::Catalog).
///
/// All of these are configuration errors: the static table is broken and the
/// process must not continue with it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("catalog has no divisions")]
    EmptyCatalog,

    #[error("timeline origin {max_start_mya} Mya is not in the past")]
    OriginNotInPast { max_start_mya: f64 },

    #[error("duplicate division id: {0}")]
    DuplicateId(String),

    #[error("invalid division id {0:?}: must be non-empty lowercase without surrounding whitespace")]
    InvalidId(String),

    #[error("division {id} has start {start_mya} not older than end {end_mya}")]
    InvertedInterval {
        id: String,
        start_mya: f64,
        end_mya: f64,
    },

    #[error("division {id} of rank {rank} has no parent; only eons may be roots")]
    MissingParent { id: String, rank: Rank },

    #[error("division {id} references unknown parent: {parent_id}")]
    DanglingParent { id: String, parent_id: String },

    #[error("division {id} ({rank}) must have a coarser parent, but {parent_id} is {parent_rank}")]
    RankOrder {
        id: String,
        rank: Rank,
        parent_id: String,
        parent_rank: Rank,
    },

    #[error("division {id} is not contained in its parent {parent_id}")]
    NotContained { id: String, parent_id: String },

    #[error("sibling divisions overlap: {first} and {second}")]
    SiblingOverlap { first: String, second: String },

    #[error("cycle detected in hierarchy at: {0}")]
    CycleDetected(String),
}

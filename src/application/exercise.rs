//! Challenge builders for the chronology and parent-division exercises.

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::application::{ApplicationError, ApplicationResult, Sampler};
use crate::domain::{Catalog, Rank, TimeDivision};

/// Top-level division whose children serve as default placement targets.
pub const DEFAULT_PLACEMENT_ROOT: &str = "phanerozoic";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Three eras
    #[default]
    Easy,
    /// Five periods
    Medium,
    /// Seven divisions of any rank
    Hard,
}

impl Difficulty {
    pub fn item_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    pub fn rank_filter(&self) -> Option<Rank> {
        match self {
            Difficulty::Easy => Some(Rank::Era),
            Difficulty::Medium => Some(Rank::Period),
            Difficulty::Hard => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Shuffled divisions for the learner to put in chronological order.
#[instrument(level = "debug", skip(sampler, catalog))]
pub fn chronology_challenge<'c, R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &'c Catalog,
    difficulty: Difficulty,
) -> Vec<&'c TimeDivision> {
    sampler.sample(catalog, difficulty.item_count(), difficulty.rank_filter())
}

/// Children of [`DEFAULT_PLACEMENT_ROOT`]: the Paleozoic, Mesozoic and Cenozoic eras.
pub fn default_placement_targets(catalog: &Catalog) -> Vec<&TimeDivision> {
    catalog.children_of(DEFAULT_PLACEMENT_ROOT)
}

/// One division whose direct parent is among `target_ids`.
#[instrument(level = "debug", skip(sampler, catalog))]
pub fn placement_challenge<'c, R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &'c Catalog,
    target_ids: &[&str],
) -> ApplicationResult<&'c TimeDivision> {
    sampler
        .sample_where(catalog, 1, |d| {
            d.parent_id
                .as_deref()
                .is_some_and(|parent| target_ids.contains(&parent))
        })
        .into_iter()
        .next()
        .ok_or_else(|| ApplicationError::NotEnoughCandidates {
            what: format!("a placement challenge for {}", target_ids.join(", ")),
        })
}

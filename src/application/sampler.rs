//! Random selection of divisions without replacement.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::domain::{Catalog, Rank, TimeDivision};

/// Draws divisions from a catalog using an injectable random source.
///
/// Candidates are permuted with a uniform Fisher-Yates shuffle and the first
/// `count` are taken, so every candidate is equally likely to be selected.
#[derive(Debug)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic sampler: the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> Sampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Up to `count` distinct divisions, optionally restricted to one rank.
    ///
    /// Asking for more than are available returns all candidates, shuffled.
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn sample<'c>(
        &mut self,
        catalog: &'c Catalog,
        count: usize,
        rank: Option<Rank>,
    ) -> Vec<&'c TimeDivision> {
        self.sample_where(catalog, count, |d| rank.is_none_or(|r| d.rank == r))
    }

    /// Like [`Sampler::sample`] with an arbitrary candidate filter.
    pub fn sample_where<'c, F>(
        &mut self,
        catalog: &'c Catalog,
        count: usize,
        predicate: F,
    ) -> Vec<&'c TimeDivision>
    where
        F: Fn(&TimeDivision) -> bool,
    {
        let mut candidates: Vec<&TimeDivision> =
            catalog.all().iter().filter(|d| predicate(d)).collect();
        let available = candidates.len();
        candidates.shuffle(&mut self.rng);
        candidates.truncate(count);
        debug!(requested = count, available, drawn = candidates.len(), "sampled");
        candidates
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

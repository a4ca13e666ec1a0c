//! Validated, immutable catalog of time divisions with O(1) id lookup.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, instrument, trace};

use crate::domain::error::DomainError;
use crate::domain::table::{DivisionSpec, GEOLOGIC_TIME_TABLE};
use crate::domain::{Rank, TimeDivision};

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, DomainError>;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog built from the embedded table on first use.
///
/// # Panics
/// If the embedded table violates a catalog invariant. A corrupt catalog is a
/// build defect and the process must not start with it.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| match Catalog::from_table(GEOLOGIC_TIME_TABLE) {
        Ok(catalog) => catalog,
        Err(e) => panic!("embedded geologic time table is invalid: {e}"),
    })
}

/// Trim and lowercase a user supplied id to catalog form.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable set of divisions, indexed by id and by parent.
///
/// There is no mutation API: once [`Catalog::new`] returns, the data is fixed.
#[derive(Debug)]
pub struct Catalog {
    divisions: Vec<TimeDivision>,
    index: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
    roots: Vec<usize>,
}

impl Catalog {
    pub fn from_table(table: &[DivisionSpec]) -> CatalogResult<Self> {
        Self::new(table.iter().map(DivisionSpec::to_division).collect())
    }

    /// Build and validate a catalog. Source order is preserved by every query.
    #[instrument(level = "debug", skip(divisions), fields(count = divisions.len()))]
    pub fn new(divisions: Vec<TimeDivision>) -> CatalogResult<Self> {
        if divisions.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        let mut index = HashMap::with_capacity(divisions.len());
        for (pos, division) in divisions.iter().enumerate() {
            validate_record(division)?;
            if index.insert(division.id.clone(), pos).is_some() {
                return Err(DomainError::DuplicateId(division.id.clone()));
            }
        }

        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (pos, division) in divisions.iter().enumerate() {
            let Some(parent_id) = &division.parent_id else {
                if division.rank != Rank::Eon {
                    return Err(DomainError::MissingParent {
                        id: division.id.clone(),
                        rank: division.rank,
                    });
                }
                roots.push(pos);
                continue;
            };
            let parent = index
                .get(parent_id)
                .map(|&p| &divisions[p])
                .ok_or_else(|| DomainError::DanglingParent {
                    id: division.id.clone(),
                    parent_id: parent_id.clone(),
                })?;
            if !parent.rank.is_coarser_than(division.rank) {
                return Err(DomainError::RankOrder {
                    id: division.id.clone(),
                    rank: division.rank,
                    parent_id: parent.id.clone(),
                    parent_rank: parent.rank,
                });
            }
            if !is_contained(division, parent) {
                return Err(DomainError::NotContained {
                    id: division.id.clone(),
                    parent_id: parent.id.clone(),
                });
            }
            children.entry(parent_id.clone()).or_default().push(pos);
        }

        let catalog = Self {
            divisions,
            index,
            children,
            roots,
        };
        catalog.check_acyclic()?;
        catalog.check_siblings()?;
        // The timeline scale divides by the origin.
        let max_start_mya = catalog.max_reference_time();
        if max_start_mya <= 0.0 {
            return Err(DomainError::OriginNotInPast { max_start_mya });
        }
        debug!(
            divisions = catalog.divisions.len(),
            roots = catalog.roots.len(),
            "catalog validated"
        );
        Ok(catalog)
    }

    pub fn lookup(&self, id: &str) -> Option<&TimeDivision> {
        self.index.get(id).map(|&pos| &self.divisions[pos])
    }

    /// All divisions in source-table order.
    pub fn all(&self) -> &[TimeDivision] {
        &self.divisions
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    pub fn by_rank(&self, rank: Rank) -> impl Iterator<Item = &TimeDivision> {
        self.divisions.iter().filter(move |d| d.rank == rank)
    }

    /// Divisions without a parent, in source order.
    pub fn roots(&self) -> Vec<&TimeDivision> {
        self.roots.iter().map(|&pos| &self.divisions[pos]).collect()
    }

    /// Direct children of `parent_id` in source order; empty for unknown ids.
    pub fn children_of(&self, parent_id: &str) -> Vec<&TimeDivision> {
        self.children
            .get(parent_id)
            .map(|positions| positions.iter().map(|&p| &self.divisions[p]).collect())
            .unwrap_or_default()
    }

    pub fn parent_of(&self, division: &TimeDivision) -> Option<&TimeDivision> {
        division
            .parent_id
            .as_deref()
            .and_then(|parent_id| self.lookup(parent_id))
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors_of(&self, division: &TimeDivision) -> Vec<&TimeDivision> {
        // Acyclicity is checked in `new`, so this cannot fail on a built catalog.
        self.ancestor_chain(division)
            .unwrap_or_else(|e| panic!("corrupt catalog: {e}"))
    }

    /// Start of the oldest division: the origin of the timeline.
    pub fn max_reference_time(&self) -> f64 {
        self.divisions
            .iter()
            .map(|d| d.start_mya)
            .fold(0.0, f64::max)
    }

    #[instrument(level = "trace", skip(self, division), fields(id = %division.id))]
    fn ancestor_chain(&self, division: &TimeDivision) -> CatalogResult<Vec<&TimeDivision>> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(division.id.as_str());
        let mut chain = Vec::new();
        let mut current = division;
        while let Some(parent) = self.parent_of(current) {
            if !visited.insert(parent.id.as_str()) {
                return Err(DomainError::CycleDetected(parent.id.clone()));
            }
            trace!(parent = %parent.id, "ancestor");
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }

    fn check_acyclic(&self) -> CatalogResult<()> {
        for division in &self.divisions {
            self.ancestor_chain(division)?;
        }
        Ok(())
    }

    /// Siblings, ordered oldest first, may touch but not overlap.
    fn check_siblings(&self) -> CatalogResult<()> {
        let groups = self
            .children
            .values()
            .map(Vec::as_slice)
            .chain(std::iter::once(self.roots.as_slice()));
        for group in groups {
            let mut siblings: Vec<&TimeDivision> =
                group.iter().map(|&p| &self.divisions[p]).collect();
            siblings.sort_by(|a, b| b.start_mya.total_cmp(&a.start_mya));
            for pair in siblings.windows(2) {
                let (older, younger) = (pair[0], pair[1]);
                if younger.start_mya > older.end_mya {
                    return Err(DomainError::SiblingOverlap {
                        first: older.id.clone(),
                        second: younger.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_record(division: &TimeDivision) -> CatalogResult<()> {
    let id = &division.id;
    if id.is_empty() || *id != id.to_lowercase() || id != id.trim() {
        return Err(DomainError::InvalidId(division.id.clone()));
    }
    // Negated so that NaN bounds are rejected as well.
    if !(division.start_mya > division.end_mya) {
        return Err(DomainError::InvertedInterval {
            id: division.id.clone(),
            start_mya: division.start_mya,
            end_mya: division.end_mya,
        });
    }
    Ok(())
}

/// Child interval inside parent interval. A forward-looking child only needs
/// its start inside the parent, its end may run past the present.
fn is_contained(child: &TimeDivision, parent: &TimeDivision) -> bool {
    let outer = parent.interval();
    if child.is_forward_looking() {
        outer.contains_instant(child.start_mya)
    } else {
        outer.contains(&child.interval())
    }
}

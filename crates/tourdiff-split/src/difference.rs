//! Symmetric edge difference of two tours.

use std::collections::BTreeSet;

use tourdiff_core::{Edge, Result, Tour, TourDiffError};

/// Returns the edges of `a` that are not in `b`.
pub fn exclusive_edges(a: &BTreeSet<Edge>, b: &BTreeSet<Edge>) -> BTreeSet<Edge> {
    a.difference(b).copied().collect()
}

/// The edges exclusive to each of two tours.
///
/// Both sides always have the same size: every vertex has degree two in
/// each tour, so whatever one tour drops at a vertex the other adds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourDifference {
    first_exclusive: BTreeSet<Edge>,
    second_exclusive: BTreeSet<Edge>,
}

impl TourDifference {
    /// Computes the difference between two tours.
    ///
    /// # Errors
    ///
    /// Fails if either tour has no valid edge set, or with
    /// [`TourDiffError::SizeMismatch`] if the tours do not share a vertex set.
    pub fn between(first: &Tour, second: &Tour) -> Result<Self> {
        Self::from_edge_sets(&first.edges()?, &second.edges()?)
    }

    /// Computes the difference between two edge sets.
    pub fn from_edge_sets(first: &BTreeSet<Edge>, second: &BTreeSet<Edge>) -> Result<Self> {
        let first_exclusive = exclusive_edges(first, second);
        let second_exclusive = exclusive_edges(second, first);
        if first_exclusive.len() != second_exclusive.len() {
            return Err(TourDiffError::SizeMismatch {
                first: first_exclusive.len(),
                second: second_exclusive.len(),
            });
        }
        Ok(Self {
            first_exclusive,
            second_exclusive,
        })
    }

    /// Edges of the first tour missing from the second.
    pub fn first_exclusive(&self) -> &BTreeSet<Edge> {
        &self.first_exclusive
    }

    /// Edges of the second tour missing from the first.
    pub fn second_exclusive(&self) -> &BTreeSet<Edge> {
        &self.second_exclusive
    }

    /// Returns k of the whole difference viewed as a single move.
    pub fn k(&self) -> usize {
        self.first_exclusive.len()
    }

    /// Total number of edges on both sides.
    pub fn edge_count(&self) -> usize {
        self.first_exclusive.len() + self.second_exclusive.len()
    }

    /// Returns true if the tours have identical edge sets.
    pub fn is_empty(&self) -> bool {
        self.first_exclusive.is_empty() && self.second_exclusive.is_empty()
    }
}

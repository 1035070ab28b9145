//! The k-opt move record produced by decomposition.
//!
//! A move pairs the edges removed from the first tour with the edges added
//! by the second. Both sides have the same length k. Moves are built once
//! by the partitioner or the junction splitter and never change afterwards.
//!
//! # Example
//!
//! ```
//! use tourdiff_core::{Edge, KMove};
//!
//! let removed = vec![Edge::new(1, 2).unwrap(), Edge::new(3, 4).unwrap()];
//! let added = vec![Edge::new(1, 3).unwrap(), Edge::new(2, 4).unwrap()];
//! let m = KMove::new(removed, added);
//!
//! assert_eq!(m.k(), 2);
//! assert!(m.is_balanced());
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, Vertex};
use crate::error::{Result, TourDiffError};

/// Edges exclusive to the first tour paired with edges exclusive to the second.
///
/// Serializes as `[first_edges, second_edges]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "(Vec<Edge>, Vec<Edge>)", into = "(Vec<Edge>, Vec<Edge>)")
)]
pub struct KMove {
    /// Edges of the first tour that the move removes.
    first: Vec<Edge>,
    /// Edges of the second tour that the move adds.
    second: Vec<Edge>,
}

impl KMove {
    /// Creates a move from its two sides.
    pub fn new(first: Vec<Edge>, second: Vec<Edge>) -> Self {
        Self { first, second }
    }

    /// Edges exclusive to the first tour.
    #[inline]
    pub fn first(&self) -> &[Edge] {
        &self.first
    }

    /// Edges exclusive to the second tour.
    #[inline]
    pub fn second(&self) -> &[Edge] {
        &self.second
    }

    /// Returns k, the number of edges on the first side.
    #[inline]
    pub fn k(&self) -> usize {
        self.first.len()
    }

    /// Total number of edges on both sides.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Returns true if neither side has edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Returns true if both sides have the same length.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.first.len() == self.second.len()
    }

    /// Fails with [`TourDiffError::UnbalancedMove`] unless both sides have equal length.
    pub fn check_balanced(&self) -> Result<()> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(TourDiffError::UnbalancedMove {
                first: self.first.len(),
                second: self.second.len(),
            })
        }
    }

    /// Iterates over the edges of both sides, first side first.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.first.iter().chain(self.second.iter())
    }

    /// Returns every vertex touched by the move.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.edges()
            .flat_map(|e| [e.low(), e.high()])
            .collect()
    }

    /// Consumes the move, returning `(first, second)`.
    pub fn into_parts(self) -> (Vec<Edge>, Vec<Edge>) {
        (self.first, self.second)
    }
}

impl From<(Vec<Edge>, Vec<Edge>)> for KMove {
    fn from((first, second): (Vec<Edge>, Vec<Edge>)) -> Self {
        Self::new(first, second)
    }
}

impl From<KMove> for (Vec<Edge>, Vec<Edge>) {
    fn from(m: KMove) -> Self {
        m.into_parts()
    }
}

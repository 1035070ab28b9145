//! Canonical undirected edges.
//!
//! An edge is stored with its smaller endpoint first, so the same edge
//! read from either tour, in either traversal direction, compares equal.
//!
//! # Example
//!
//! ```
//! use tourdiff_core::Edge;
//!
//! let forward = Edge::new(7, 3).unwrap();
//! let backward = Edge::new(3, 7).unwrap();
//! assert_eq!(forward, backward);
//! assert_eq!(forward.endpoints(), (3, 7));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TourDiffError};

/// Vertex identifier as it appears in a tour.
pub type Vertex = usize;

/// An unordered pair of distinct vertices, stored as `(min, max)`.
///
/// Serializes as a two-element array `[low, high]`; deserialization
/// canonicalizes the pair and rejects self-loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(Vertex, Vertex)", into = "(Vertex, Vertex)")
)]
pub struct Edge {
    low: Vertex,
    high: Vertex,
}

impl Edge {
    /// Creates the canonical edge between `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`TourDiffError::SelfLoop`] if `i == j`.
    pub fn new(i: Vertex, j: Vertex) -> Result<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Ok(Self { low: i, high: j }),
            std::cmp::Ordering::Greater => Ok(Self { low: j, high: i }),
            std::cmp::Ordering::Equal => Err(TourDiffError::SelfLoop { vertex: i }),
        }
    }

    /// Returns the smaller endpoint.
    #[inline]
    pub const fn low(&self) -> Vertex {
        self.low
    }

    /// Returns the larger endpoint.
    #[inline]
    pub const fn high(&self) -> Vertex {
        self.high
    }

    /// Returns both endpoints as `(low, high)`.
    #[inline]
    pub const fn endpoints(&self) -> (Vertex, Vertex) {
        (self.low, self.high)
    }

    /// Returns true if `v` is one of the endpoints.
    #[inline]
    pub const fn touches(&self, v: Vertex) -> bool {
        self.low == v || self.high == v
    }

    /// Returns the endpoint opposite `v`.
    ///
    /// `v` must be an endpoint; for any other vertex the low endpoint is returned.
    #[inline]
    pub const fn other(&self, v: Vertex) -> Vertex {
        if self.low == v {
            self.high
        } else {
            self.low
        }
    }
}

impl TryFrom<(Vertex, Vertex)> for Edge {
    type Error = TourDiffError;

    fn try_from((i, j): (Vertex, Vertex)) -> Result<Self> {
        Self::new(i, j)
    }
}

impl From<Edge> for (Vertex, Vertex) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

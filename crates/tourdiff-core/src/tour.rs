//! Tours and their cyclic edge sets.

use std::collections::BTreeSet;

use crate::edge::{Edge, Vertex};
use crate::error::{Result, TourDiffError};

/// A Hamiltonian cycle given as an ordered vertex sequence.
///
/// The sequence wraps around: the last vertex connects back to the first.
/// Vertex ids are kept as read (TSPLIB tours are 1-based).
///
/// # Example
///
/// ```
/// use tourdiff_core::Tour;
///
/// let tour = Tour::new(vec![1, 2, 3, 4]);
/// let edges = tour.edges().unwrap();
/// assert_eq!(edges.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour {
    vertices: Vec<Vertex>,
}

impl Tour {
    /// Creates a tour from its visiting order.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Returns the visiting order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the tour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// Returns the cyclic edge set of this tour.
    ///
    /// See [`tour_edges`].
    pub fn edges(&self) -> Result<BTreeSet<Edge>> {
        tour_edges(&self.vertices)
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl From<Vec<Vertex>> for Tour {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vertex> for Tour {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Builds the cyclic edge set of a tour, wrapping from last to first.
///
/// For `n >= 3` distinct vertices the set has exactly `n` edges. A tour of
/// two vertices degenerates: both of its edges canonicalize to the same
/// pair, so the set holds a single edge.
///
/// # Errors
///
/// - [`TourDiffError::EmptyTour`] for an empty sequence
/// - [`TourDiffError::SelfLoop`] when a vertex follows itself, which
///   includes every single-vertex tour
pub fn tour_edges(tour: &[Vertex]) -> Result<BTreeSet<Edge>> {
    let Some(&last) = tour.last() else {
        return Err(TourDiffError::EmptyTour);
    };

    let mut edges = BTreeSet::new();
    let mut prev = last;
    for &v in tour {
        edges.insert(Edge::new(prev, v)?);
        prev = v;
    }
    Ok(edges)
}

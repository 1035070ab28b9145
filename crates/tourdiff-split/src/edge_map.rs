//! Vertex to incident-edge index over a difference graph.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use tourdiff_core::{Edge, Result, TourDiffError, Vertex};

/// Degree of a junction vertex.
pub const JUNCTION_DEGREE: usize = 4;

/// Maps each touched vertex to the difference edges incident to it.
///
/// A vertex of a tour difference has at most four incident edges, two from
/// each tour, so the edge lists stay inline. Vertices are kept ordered so
/// traversals start from the lowest remaining vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMap {
    incident: BTreeMap<Vertex, SmallVec<[Edge; JUNCTION_DEGREE]>>,
}

impl EdgeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map indexing every edge under both of its endpoints.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut map = Self::new();
        for edge in edges {
            map.insert(*edge);
        }
        map
    }

    /// Indexes `edge` under both endpoints. Inserting an edge twice has no effect.
    pub fn insert(&mut self, edge: Edge) {
        for v in [edge.low(), edge.high()] {
            let list = self.incident.entry(v).or_default();
            if !list.contains(&edge) {
                list.push(edge);
            }
        }
    }

    /// Removes `edge` from both endpoints, dropping vertices left without edges.
    pub fn remove_edge(&mut self, edge: &Edge) {
        for v in [edge.low(), edge.high()] {
            if let Some(list) = self.incident.get_mut(&v) {
                list.retain(|e| e != edge);
                if list.is_empty() {
                    self.incident.remove(&v);
                }
            }
        }
    }

    /// Removes a vertex, returning its incident edges.
    ///
    /// The edges stay indexed under their other endpoints.
    pub fn take(&mut self, v: Vertex) -> Option<SmallVec<[Edge; JUNCTION_DEGREE]>> {
        self.incident.remove(&v)
    }

    /// Edges incident to `v`; empty for untouched vertices.
    pub fn incident(&self, v: Vertex) -> &[Edge] {
        self.incident
            .get(&v)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Number of difference edges incident to `v`.
    pub fn degree(&self, v: Vertex) -> usize {
        self.incident(v).len()
    }

    /// Returns true if `v` has exactly four incident edges.
    pub fn is_junction(&self, v: Vertex) -> bool {
        self.degree(v) == JUNCTION_DEGREE
    }

    /// Lowest vertex still in the map.
    pub fn first_vertex(&self) -> Option<Vertex> {
        self.incident.keys().next().copied()
    }

    /// Junction vertices in ascending order.
    pub fn junctions(&self) -> Vec<Vertex> {
        self.incident
            .iter()
            .filter(|(_, edges)| edges.len() == JUNCTION_DEGREE)
            .map(|(&v, _)| v)
            .collect()
    }

    /// Sum of all incident-edge list sizes: twice the number of edges.
    pub fn incidence_count(&self) -> usize {
        self.incident.values().map(|edges| edges.len()).sum()
    }

    /// Number of vertices in the map.
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    /// Returns true if no vertex remains.
    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    /// Checks that every vertex has degree 2 or 4.
    ///
    /// # Errors
    ///
    /// [`TourDiffError::InvalidDegree`] naming the lowest offending vertex.
    pub fn check_degrees(&self) -> Result<()> {
        match self
            .incident
            .iter()
            .find(|(_, edges)| edges.len() != 2 && edges.len() != JUNCTION_DEGREE)
        {
            Some((&vertex, edges)) => Err(TourDiffError::InvalidDegree {
                vertex,
                degree: edges.len(),
            }),
            None => Ok(()),
        }
    }
}

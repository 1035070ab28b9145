//! Error types for tourdiff

use thiserror::Error;

use crate::edge::{Edge, Vertex};

/// Main error type for tour decomposition.
///
/// Every variant except [`TourDiffError::EmptyTour`] and
/// [`TourDiffError::SelfLoop`] signals that the two tours do not share a
/// vertex set. None of them is recoverable: a malformed difference graph
/// cannot be trusted for anything computed after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourDiffError {
    /// An edge joins a vertex to itself
    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: Vertex },

    /// A tour without vertices has no edge set
    #[error("tour is empty")]
    EmptyTour,

    /// A vertex of the difference graph has a degree other than 2 or 4
    #[error("vertex {vertex} has {degree} incident difference edges (expected 2 or 4)")]
    InvalidDegree { vertex: Vertex, degree: usize },

    /// The two exclusive edge sets differ in size
    #[error("exclusive edge sets differ in size: {first} vs {second}")]
    SizeMismatch { first: usize, second: usize },

    /// The vertex->edge map does not count every edge exactly twice
    #[error("edge map holds {actual} incidences, expected {expected}")]
    IncidenceMismatch { expected: usize, actual: usize },

    /// Islands do not add up to the whole difference
    #[error("islands hold {actual} edges, expected {expected}")]
    EdgeCountMismatch { expected: usize, actual: usize },

    /// A move has a different number of edges on each side
    #[error("unbalanced move: {first} edges removed, {second} edges added")]
    UnbalancedMove { first: usize, second: usize },

    /// An edge belongs to neither exclusive set
    #[error("edge {edge} is not part of the tour difference")]
    ForeignEdge { edge: Edge },
}

/// Result type alias for tourdiff operations
pub type Result<T> = std::result::Result<T, TourDiffError>;

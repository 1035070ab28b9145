//! tourdiff core - Value types shared by every tourdiff crate
//!
//! This crate provides the vocabulary of a tour comparison:
//! - [`Edge`]: canonical undirected edge between two vertices
//! - [`Tour`]: cyclic vertex sequence and its edge set
//! - [`KMove`]: a pair of equal-size edge lists describing a k-opt move
//! - [`TourDiffError`]: the error taxonomy for malformed differences

pub mod edge;
pub mod error;
pub mod kmove;
pub mod tour;


pub use edge::{Edge, Vertex};
pub use error::{Result, TourDiffError};
pub use kmove::KMove;
pub use tour::{tour_edges, Tour};

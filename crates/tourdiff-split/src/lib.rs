//! Decomposition of a tour difference into disjoint k-opt moves.
//!
//! Two tours over the same vertices differ by a set of removed and added
//! edges. This crate groups that difference into the smallest independent
//! moves it can find:
//!
//! 1. [`TourDifference`] computes the edges exclusive to each tour.
//! 2. [`split_difference`] partitions them into vertex-connected islands.
//! 3. [`split_island`] peels closed cycles off junction vertices.
//! 4. [`Decomposer`] runs the whole pipeline under a [`DecomposeConfig`].
//!
//! # Example
//!
//! ```
//! use tourdiff_core::Tour;
//! use tourdiff_split::decompose_tours;
//!
//! let first = Tour::new((1..=8).collect());
//! // 2-opt: reverse positions 2..=4
//! let second = Tour::new(vec![1, 2, 5, 4, 3, 6, 7, 8]);
//!
//! let decomposition = decompose_tours(&first, &second).unwrap();
//! assert_eq!(decomposition.total_k(), 2);
//! assert_eq!(decomposition.move_sizes(), vec![2]);
//! ```

pub mod decompose;
pub mod difference;
pub mod edge_map;
pub mod island;
pub mod junction;

#[cfg(test)]
mod tests;

pub use decompose::{decompose_tours, verify_partition, Decomposer, Decomposition};
pub use difference::{exclusive_edges, TourDifference};
pub use edge_map::EdgeMap;
pub use island::{extract_island, split_difference};
pub use junction::{split_island, test_junction, JunctionSplitter};

pub use tourdiff_config::{AssertMode, DecomposeConfig};

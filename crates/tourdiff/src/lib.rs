//! tourdiff - Split the difference between two tours into disjoint k-opt moves
//!
//! # Example
//!
//! ```rust
//! use tourdiff::prelude::*;
//!
//! let first = Tour::new((1..=10).collect());
//! let second = Tour::new(vec![1, 2, 6, 5, 4, 3, 7, 8, 9, 10]);
//!
//! let decomposition = decompose_tours(&first, &second).unwrap();
//! assert_eq!(decomposition.move_sizes(), vec![2]);
//!
//! let json = moves_to_json(decomposition.moves()).unwrap();
//! assert_eq!(json, "[[[[2,3],[6,7]],[[2,6],[3,7]]]]");
//! ```

mod error;
mod files;
mod report;

pub use error::{Error, Result};
pub use files::{decompose_files, moves_from_json, moves_to_json, read_moves, write_moves};
pub use report::{MoveCost, MoveReport};

// Value types
pub use tourdiff_core::{tour_edges, Edge, KMove, Tour, TourDiffError, Vertex};

// Decomposition
pub use tourdiff_split::{
    decompose_tours, exclusive_edges, extract_island, split_difference, split_island,
    test_junction, verify_partition, Decomposer, Decomposition, EdgeMap, JunctionSplitter,
    TourDifference,
};

// Configuration
pub use tourdiff_config::{AssertMode, ConfigError, DecomposeConfig};

// TSPLIB collaborators
pub use tourdiff_tsplib as tsplib;

// Console output
#[cfg(feature = "console")]
pub use tourdiff_console as console;

pub mod prelude {
    pub use super::{decompose_tours, moves_to_json, Decomposer, DecomposeConfig, Decomposition};
    pub use super::{Edge, KMove, Tour, Vertex};
}

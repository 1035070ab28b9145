//! TSPLIB readers and EUC_2D costs.
//!
//! Only the two sections tourdiff needs are read: `TOUR_SECTION` of a tour
//! file and `NODE_COORD_SECTION` of an instance file. Header fields are
//! skipped.
//!
//! # Example
//!
//! ```
//! use tourdiff_tsplib::{parse_instance, parse_tour, tour_cost};
//!
//! let instance = parse_instance("NODE_COORD_SECTION\n1 0 0\n2 3 0\n3 3 4\nEOF\n").unwrap();
//! let tour = parse_tour("TOUR_SECTION\n1\n2\n3\n-1\n").unwrap();
//! assert_eq!(tour_cost(&instance, &tour).unwrap(), 12);
//! ```

mod cost;
mod error;
mod instance;
mod tour;

pub use cost::{edge_cost, edge_cost_sum, move_gain, tour_cost};
pub use error::TsplibError;
pub use instance::{parse_instance, read_instance, Coord, Instance};
pub use tour::{parse_tour, read_tour};

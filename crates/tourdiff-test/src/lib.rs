//! Shared test fixtures for tourdiff crates.
//!
//! This crate provides tour builders and hand-made difference graphs.
//!
//! - [`tours`] - sequential and random tours, 2-opt and double-bridge perturbations
//! - [`moves`] - islands with known junction structure
//! - [`tsplib`] - small TSPLIB documents
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourdiff-test = { workspace = true }
//! ```

pub mod moves;
pub mod tours;
pub mod tsplib;

pub use moves::{adjacent_junction_island, edge, odd_junction_island, shared_vertex_two_opts};
pub use tours::{double_bridge, random_tour, random_two_opts, sequential_tour, two_opt};

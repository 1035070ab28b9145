//! Tests for tour difference decomposition.

use std::collections::BTreeSet;

use tourdiff_core::{Edge, KMove, Tour, TourDiffError};
use tourdiff_test::{
    adjacent_junction_island, double_bridge, edge, odd_junction_island, random_tour,
    random_two_opts, sequential_tour, shared_vertex_two_opts, two_opt,
};

use super::*;

mod decompose;
mod difference;
mod junction;

fn edge_set(edges: &[(usize, usize)]) -> BTreeSet<Edge> {
    edges.iter().map(|&(i, j)| edge(i, j)).collect()
}

fn islands_of(first: &Tour, second: &Tour) -> Vec<KMove> {
    let difference = TourDifference::between(first, second).unwrap();
    split_difference(difference.first_exclusive(), difference.second_exclusive()).unwrap()
}

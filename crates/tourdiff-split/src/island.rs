//! Partitioning a tour difference into vertex-connected islands.
//!
//! An island is a maximal connected component of the difference graph.
//! Islands share no vertex with each other, so each is an independent move.

use std::collections::{BTreeSet, VecDeque};

use tourdiff_core::{Edge, KMove, Result, TourDiffError};
use tracing::debug;

use crate::edge_map::EdgeMap;

/// Removes one island from `map` and returns its edges.
///
/// Starts from the lowest remaining vertex and walks breadth-first through
/// shared vertices. Every visited vertex is removed from the map, so calling
/// this until it returns `None` yields each island exactly once.
pub fn extract_island(map: &mut EdgeMap) -> Option<BTreeSet<Edge>> {
    let start = map.first_vertex()?;

    let mut edges = BTreeSet::new();
    let mut frontier = VecDeque::from([start]);
    while let Some(v) = frontier.pop_front() {
        let Some(incident) = map.take(v) else {
            continue;
        };
        for edge in incident {
            if edges.insert(edge) {
                frontier.push_back(edge.other(v));
            }
        }
    }
    Some(edges)
}

/// Splits the difference between two tours into one move per island.
///
/// `first_exclusive` and `second_exclusive` are the edges found only in the
/// first and only in the second tour. Islands come out ordered by their
/// lowest vertex; each move lists its edges in ascending order.
///
/// # Errors
///
/// Any of these aborts the split:
/// - [`TourDiffError::SizeMismatch`] if the two sets differ in size
/// - [`TourDiffError::InvalidDegree`] if a vertex has 1, 3 or more than 4 incident edges
/// - [`TourDiffError::IncidenceMismatch`] if an edge is not counted at both endpoints
/// - [`TourDiffError::UnbalancedMove`] if an island removes and adds different edge counts
/// - [`TourDiffError::EdgeCountMismatch`] if the islands do not cover the difference
pub fn split_difference(
    first_exclusive: &BTreeSet<Edge>,
    second_exclusive: &BTreeSet<Edge>,
) -> Result<Vec<KMove>> {
    if first_exclusive.len() != second_exclusive.len() {
        return Err(TourDiffError::SizeMismatch {
            first: first_exclusive.len(),
            second: second_exclusive.len(),
        });
    }

    let mut map = EdgeMap::from_edges(first_exclusive.iter().chain(second_exclusive));
    map.check_degrees()?;

    let expected = 4 * first_exclusive.len();
    let actual = map.incidence_count();
    if actual != expected {
        return Err(TourDiffError::IncidenceMismatch { expected, actual });
    }

    let mut islands = Vec::new();
    let mut edge_count = 0;
    while let Some(edges) = extract_island(&mut map) {
        let mut first = Vec::new();
        let mut second = Vec::new();
        for edge in edges {
            if first_exclusive.contains(&edge) {
                first.push(edge);
            } else if second_exclusive.contains(&edge) {
                second.push(edge);
            } else {
                return Err(TourDiffError::ForeignEdge { edge });
            }
        }

        let island = KMove::new(first, second);
        island.check_balanced()?;
        edge_count += island.edge_count();

        debug!(
            event = "island",
            island_index = islands.len(),
            k = island.k(),
            edge_count = island.edge_count(),
        );
        islands.push(island);
    }

    let expected = first_exclusive.len() + second_exclusive.len();
    if edge_count != expected {
        return Err(TourDiffError::EdgeCountMismatch {
            expected,
            actual: edge_count,
        });
    }

    Ok(islands)
}

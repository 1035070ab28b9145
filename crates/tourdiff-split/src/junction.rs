//! Splitting islands at junction vertices.
//!
//! A junction is a vertex with four incident difference edges: both of its
//! edges in the first tour were removed and both of its edges in the second
//! tour were added. Walking out of a junction along degree-2 vertices either
//! reaches another junction or comes back to the start. A walk that comes
//! back closes an elementary cycle which can be applied on its own, so it is
//! peeled off the island as a separate move.
//!
//! Cycles between two junctions are not resolved: an island whose junctions
//! only reach each other stays whole.

use std::collections::BTreeSet;

use tourdiff_core::{Edge, KMove, Result, Vertex};
use tracing::{debug, trace};

use crate::edge_map::EdgeMap;

/// Islands with fewer edges cannot contain a junction.
const MIN_SPLITTABLE_EDGES: usize = 4;

/// Looks for a closed cycle that leaves `junction` and returns to it
/// through degree-2 vertices only.
///
/// Each of the junction's incident edges is followed in turn; a branch that
/// reaches another junction is abandoned. Returns the edges of the first
/// cycle found, in walking order, or `None` if `junction` is not a junction
/// of `map` or every branch ends at another junction.
pub fn test_junction(map: &EdgeMap, junction: Vertex) -> Option<Vec<Edge>> {
    if !map.is_junction(junction) {
        return None;
    }

    // A simple cycle cannot be longer than the map has edges.
    let limit = map.incidence_count() / 2;

    for &start in map.incident(junction) {
        let mut path = vec![start];
        let mut last = start;
        let mut current = start.other(junction);

        loop {
            if current == junction {
                return Some(path);
            }

            let incident = map.incident(current);
            if incident.len() != 2 || path.len() >= limit {
                trace!(
                    event = "branch_blocked",
                    junction = junction,
                    blocked_at = current,
                );
                break;
            }

            let next = if incident[0] == last {
                incident[1]
            } else {
                incident[0]
            };
            path.push(next);
            last = next;
            current = next.other(current);
        }
    }

    None
}

/// Splits islands at their junctions.
///
/// # Example
///
/// ```
/// use tourdiff_core::{Edge, KMove};
/// use tourdiff_split::JunctionSplitter;
///
/// let e = |i, j| Edge::new(i, j).unwrap();
/// // A plain 2-opt has no junction and comes back unchanged.
/// let m = KMove::new(vec![e(1, 2), e(3, 4)], vec![e(1, 3), e(2, 4)]);
/// let moves = JunctionSplitter::new().split(m.clone()).unwrap();
/// assert_eq!(moves, vec![m]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JunctionSplitter {
    keep_empty_residuals: bool,
}

impl JunctionSplitter {
    /// Creates a splitter that drops empty residual moves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the residual move even when every edge was peeled off.
    pub fn with_keep_empty_residuals(mut self, keep: bool) -> Self {
        self.keep_empty_residuals = keep;
        self
    }

    /// Splits one island into disjoint moves.
    ///
    /// Returns the island unchanged when it has no junction or none of its
    /// junctions closes an even cycle. Otherwise returns every peeled cycle,
    /// in junction order, followed by the residual move holding the edges
    /// that were left.
    ///
    /// # Errors
    ///
    /// Fails if the island is unbalanced or has a vertex of degree other than 2 or 4.
    pub fn split(&self, island: KMove) -> Result<Vec<KMove>> {
        island.check_balanced()?;
        if island.edge_count() < MIN_SPLITTABLE_EDGES {
            return Ok(vec![island]);
        }

        let mut map = EdgeMap::from_edges(island.edges());
        map.check_degrees()?;

        let junctions = map.junctions();
        if junctions.is_empty() {
            return Ok(vec![island]);
        }

        let first_side: BTreeSet<Edge> = island.first().iter().copied().collect();
        let mut peeled = BTreeSet::new();
        let mut moves = Vec::new();

        for junction in junctions {
            let Some(cycle) = test_junction(&map, junction) else {
                debug!(event = "junction_unresolved", junction = junction);
                continue;
            };
            if cycle.len() % 2 != 0 {
                debug!(
                    event = "junction_odd_cycle",
                    junction = junction,
                    edge_count = cycle.len(),
                );
                continue;
            }

            for edge in &cycle {
                map.remove_edge(edge);
                peeled.insert(*edge);
            }

            let (mut first, mut second): (Vec<Edge>, Vec<Edge>) =
                cycle.into_iter().partition(|e| first_side.contains(e));
            first.sort_unstable();
            second.sort_unstable();

            let sub = KMove::new(first, second);
            sub.check_balanced()?;
            debug!(event = "junction_split", junction = junction, k = sub.k());
            moves.push(sub);
        }

        if moves.is_empty() {
            return Ok(vec![island]);
        }

        let (first, second) = island.into_parts();
        let residual = KMove::new(
            first.into_iter().filter(|e| !peeled.contains(e)).collect(),
            second.into_iter().filter(|e| !peeled.contains(e)).collect(),
        );
        residual.check_balanced()?;
        if !residual.is_empty() || self.keep_empty_residuals {
            moves.push(residual);
        }

        Ok(moves)
    }
}

/// Splits one island at its junctions, dropping an empty residual.
///
/// See [`JunctionSplitter::split`].
pub fn split_island(island: KMove) -> Result<Vec<KMove>> {
    JunctionSplitter::new().split(island)
}

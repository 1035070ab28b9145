//! Islands with known junction structure.

use tourdiff_core::{Edge, KMove, Tour, Vertex};

/// Canonical edge between `i` and `j`.
///
/// # Panics
///
/// Panics if `i == j`.
pub fn edge(i: Vertex, j: Vertex) -> Edge {
    Edge::new(i, j).expect("fixture edge must not be a self-loop")
}

/// Two 2-opt moves meeting at vertex 5, which becomes a junction.
///
/// The first tour is `1..=12`. The second reverses positions 1..=3 and
/// 5..=7, giving `1 4 3 2 5 8 7 6 9 10 11 12`. The difference is a single
/// island with k = 4 that splits into two 2-opt moves at vertex 5.
pub fn shared_vertex_two_opts() -> (Tour, Tour) {
    let first = Tour::new((1..=12).collect());
    let second = Tour::new(vec![1, 4, 3, 2, 5, 8, 7, 6, 9, 10, 11, 12]);
    (first, second)
}

/// An island whose two junctions, 1 and 2, only reach each other.
///
/// Four paths join the junctions: `1-2`, `1-3-2`, `1-4-5-2` and `1-6-2`,
/// alternating between removed and added edges. No cycle returns to a
/// junction without passing the other one.
pub fn adjacent_junction_island() -> KMove {
    KMove::new(
        vec![edge(1, 2), edge(2, 3), edge(4, 5), edge(1, 6)],
        vec![edge(1, 3), edge(1, 4), edge(2, 5), edge(2, 6)],
    )
}

/// An island whose junction 1 closes two odd cycles.
///
/// `1-2-3-1` uses removed, added, removed edges and `1-4-5-1` uses added,
/// removed, added edges. Neither cycle is balanced on its own.
pub fn odd_junction_island() -> KMove {
    KMove::new(
        vec![edge(1, 2), edge(1, 3), edge(4, 5)],
        vec![edge(2, 3), edge(1, 4), edge(1, 5)],
    )
}

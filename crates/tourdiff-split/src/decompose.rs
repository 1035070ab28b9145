//! The full decomposition pipeline.

use std::collections::BTreeSet;
use std::time::Instant;

use rayon::prelude::*;
use tourdiff_config::DecomposeConfig;
use tourdiff_core::{Edge, KMove, Result, Tour, TourDiffError};
use tracing::info;

use crate::difference::TourDifference;
use crate::island::split_difference;
use crate::junction::JunctionSplitter;

/// The result of decomposing a tour difference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
    total_k: usize,
    island_count: usize,
    moves: Vec<KMove>,
}

impl Decomposition {
    /// k of the whole difference viewed as a single move.
    pub fn total_k(&self) -> usize {
        self.total_k
    }

    /// Number of islands before junction splitting.
    pub fn island_count(&self) -> usize {
        self.island_count
    }

    /// The disjoint moves.
    pub fn moves(&self) -> &[KMove] {
        &self.moves
    }

    /// Number of disjoint moves.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// k of each move, in output order.
    pub fn move_sizes(&self) -> Vec<usize> {
        self.moves.iter().map(KMove::k).collect()
    }

    /// Returns true if the tours had the same edges.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Consumes the decomposition, returning the moves.
    pub fn into_moves(self) -> Vec<KMove> {
        self.moves
    }
}

/// Runs the difference, island and junction stages under one configuration.
///
/// # Example
///
/// ```
/// use tourdiff_core::Tour;
/// use tourdiff_split::{DecomposeConfig, Decomposer};
///
/// let decomposer = Decomposer::new(DecomposeConfig::new().with_split_junctions(false));
/// let tour = Tour::new(vec![3, 1, 4, 2, 5]);
/// let decomposition = decomposer.decompose(&tour, &tour.reversed()).unwrap();
/// assert!(decomposition.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    config: DecomposeConfig,
}

impl Decomposer {
    /// Creates a decomposer with the given configuration.
    pub fn new(config: DecomposeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DecomposeConfig {
        &self.config
    }

    /// Decomposes the difference between two tours.
    pub fn decompose(&self, first: &Tour, second: &Tour) -> Result<Decomposition> {
        let difference = TourDifference::between(first, second)?;
        self.decompose_difference(&difference)
    }

    /// Decomposes an already computed difference.
    pub fn decompose_difference(&self, difference: &TourDifference) -> Result<Decomposition> {
        let start = Instant::now();
        info!(
            event = "decompose_start",
            total_k = difference.k(),
            edge_count = difference.edge_count(),
        );

        let islands =
            split_difference(difference.first_exclusive(), difference.second_exclusive())?;
        let island_count = islands.len();

        let moves = if self.config.split_junctions {
            let splitter = JunctionSplitter::new()
                .with_keep_empty_residuals(self.config.keep_empty_residuals);
            let split: Vec<Vec<KMove>> = if self.config.parallel_islands {
                islands
                    .into_par_iter()
                    .map(|island| splitter.split(island))
                    .collect::<Result<_>>()?
            } else {
                islands
                    .into_iter()
                    .map(|island| splitter.split(island))
                    .collect::<Result<_>>()?
            };
            split.into_iter().flatten().collect()
        } else {
            islands
        };

        if self.config.full_assert() {
            verify_partition(difference, &moves)?;
        }

        info!(
            event = "decompose_end",
            island_count = island_count,
            move_count = moves.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(Decomposition {
            total_k: difference.k(),
            island_count,
            moves,
        })
    }
}

/// Decomposes the difference between two tours with the default configuration.
pub fn decompose_tours(first: &Tour, second: &Tour) -> Result<Decomposition> {
    Decomposer::default().decompose(first, second)
}

/// Checks that `moves` partition `difference`.
///
/// Every move must be balanced, its first side drawn from the first
/// exclusive set and its second side from the second, and together the
/// moves must hold each difference edge exactly once. Empty moves are allowed.
pub fn verify_partition(difference: &TourDifference, moves: &[KMove]) -> Result<()> {
    let mut seen: BTreeSet<Edge> = BTreeSet::new();
    let mut count = 0;

    for m in moves {
        m.check_balanced()?;
        let sides = [
            (m.first(), difference.first_exclusive()),
            (m.second(), difference.second_exclusive()),
        ];
        for (edges, exclusive) in sides {
            for edge in edges {
                if !exclusive.contains(edge) {
                    return Err(TourDiffError::ForeignEdge { edge: *edge });
                }
                seen.insert(*edge);
                count += 1;
            }
        }
    }

    let expected = difference.edge_count();
    if count != expected || seen.len() != expected {
        return Err(TourDiffError::EdgeCountMismatch {
            expected,
            actual: count,
        });
    }
    Ok(())
}

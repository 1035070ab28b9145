//! Cost summary of a list of moves.

use tourdiff_core::KMove;
use tourdiff_tsplib::{move_gain, Instance, TsplibError};

/// Gain and size of one move.
///
/// Orders by gain first, then by k.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveCost {
    /// Cost of the removed edges minus cost of the added edges.
    pub gain: i64,
    /// Number of edges on each side.
    pub k: usize,
}

/// Per-move gains sorted ascending, with totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    costs: Vec<MoveCost>,
    total_k: usize,
    total_gain: i64,
}

impl MoveReport {
    /// Prices every move against `instance`.
    pub fn new(instance: &Instance, moves: &[KMove]) -> Result<Self, TsplibError> {
        let mut costs = moves
            .iter()
            .map(|m| {
                Ok(MoveCost {
                    gain: move_gain(instance, m)?,
                    k: m.k(),
                })
            })
            .collect::<Result<Vec<_>, TsplibError>>()?;
        costs.sort_unstable();

        let total_k = costs.iter().map(|c| c.k).sum();
        let total_gain = costs.iter().map(|c| c.gain).sum();
        Ok(Self {
            costs,
            total_k,
            total_gain,
        })
    }

    /// Move costs, lowest gain first.
    pub fn costs(&self) -> &[MoveCost] {
        &self.costs
    }

    /// Sum of k over all moves.
    pub fn total_k(&self) -> usize {
        self.total_k
    }

    /// Sum of gains over all moves.
    pub fn total_gain(&self) -> i64 {
        self.total_gain
    }
}

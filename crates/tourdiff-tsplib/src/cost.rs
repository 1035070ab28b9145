//! Tour and move costs under EUC_2D distances.

use tourdiff_core::{Edge, KMove, Tour};

use crate::error::TsplibError;
use crate::instance::Instance;

/// Distance between the endpoints of `edge`.
pub fn edge_cost(instance: &Instance, edge: &Edge) -> Result<i64, TsplibError> {
    instance.distance(edge.low(), edge.high())
}

/// Sum of the costs of `edges`.
pub fn edge_cost_sum<'a>(
    instance: &Instance,
    edges: impl IntoIterator<Item = &'a Edge>,
) -> Result<i64, TsplibError> {
    edges
        .into_iter()
        .map(|edge| edge_cost(instance, edge))
        .sum()
}

/// Length of the closed tour, including the edge from last back to first.
pub fn tour_cost(instance: &Instance, tour: &Tour) -> Result<i64, TsplibError> {
    let vertices = tour.vertices();
    let Some(&last) = vertices.last() else {
        return Ok(0);
    };

    let mut prev = last;
    let mut cost = 0;
    for &v in vertices {
        cost += instance.distance(prev, v)?;
        prev = v;
    }
    Ok(cost)
}

/// Cost of the removed edges minus cost of the added edges.
///
/// Positive when applying the move shortens the first tour.
pub fn move_gain(instance: &Instance, kmove: &KMove) -> Result<i64, TsplibError> {
    Ok(edge_cost_sum(instance, kmove.first())? - edge_cost_sum(instance, kmove.second())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_instance, parse_tour};
    use tourdiff_test::edge;
    use tourdiff_test::tsplib::{SQUARE_INSTANCE, SQUARE_TOUR};

    #[test]
    fn test_tour_cost() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        let tour = parse_tour(SQUARE_TOUR).unwrap();
        // 1-5: 2, 5-2: 0, 2-3: 4, 3-4: 3, 4-1: 4
        assert_eq!(tour_cost(&instance, &tour).unwrap(), 13);
        assert_eq!(tour_cost(&instance, &tour.reversed()).unwrap(), 13);
    }

    #[test]
    fn test_empty_tour_costs_nothing() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        assert_eq!(tour_cost(&instance, &Tour::default()).unwrap(), 0);
    }

    #[test]
    fn test_edge_cost_sum() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        let edges = [edge(1, 2), edge(2, 3), edge(1, 3)];
        assert_eq!(edge_cost_sum(&instance, &edges).unwrap(), 12);
    }

    #[test]
    fn test_move_gain() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        // Replace the diagonals 1-3 and 2-4 by the sides 1-2 and 3-4.
        let m = KMove::new(vec![edge(1, 3), edge(2, 4)], vec![edge(1, 2), edge(3, 4)]);
        assert_eq!(move_gain(&instance, &m).unwrap(), 10 - 6);
    }

    #[test]
    fn test_cost_of_unknown_vertex() {
        let instance = parse_instance(SQUARE_INSTANCE).unwrap();
        let tour = Tour::new(vec![1, 2, 9]);
        assert!(matches!(
            tour_cost(&instance, &tour),
            Err(TsplibError::VertexOutOfRange { vertex: 9, .. })
        ));
    }
}

use super::*;

#[test]
fn test_identical_tours_have_no_difference() {
    let tour = random_tour(30, 1);
    let difference = TourDifference::between(&tour, &tour).unwrap();
    assert!(difference.is_empty());
    assert_eq!(difference.k(), 0);
}

#[test]
fn test_reversed_tour_has_no_difference() {
    let tour = random_tour(30, 2);
    let difference = TourDifference::between(&tour, &tour.reversed()).unwrap();
    assert!(difference.is_empty());
}

#[test]
fn test_two_opt_difference() {
    let first = sequential_tour(8);
    let second = two_opt(&first, 2, 4);
    let difference = TourDifference::between(&first, &second).unwrap();

    assert_eq!(difference.first_exclusive(), &edge_set(&[(2, 3), (5, 6)]));
    assert_eq!(difference.second_exclusive(), &edge_set(&[(2, 5), (3, 6)]));
    assert_eq!(difference.k(), 2);
    assert_eq!(difference.edge_count(), 4);
}

#[test]
fn test_exclusive_sets_have_equal_size() {
    for seed in 0..10 {
        let first = random_tour(25, seed);
        let second = random_tour(25, seed + 100);
        let difference = TourDifference::between(&first, &second).unwrap();
        assert_eq!(
            difference.first_exclusive().len(),
            difference.second_exclusive().len()
        );
    }
}

#[test]
fn test_exclusive_edges_is_set_difference() {
    let a = edge_set(&[(1, 2), (2, 3), (3, 4)]);
    let b = edge_set(&[(2, 3), (4, 5)]);
    assert_eq!(exclusive_edges(&a, &b), edge_set(&[(1, 2), (3, 4)]));
    assert_eq!(exclusive_edges(&b, &a), edge_set(&[(4, 5)]));
}

#[test]
fn test_different_vertex_sets_are_rejected() {
    let first = sequential_tour(5);
    let second = sequential_tour(6);
    assert_eq!(
        TourDifference::between(&first, &second),
        Err(TourDiffError::SizeMismatch { first: 1, second: 2 })
    );
}

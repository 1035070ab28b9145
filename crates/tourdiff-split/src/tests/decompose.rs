use super::*;

#[test]
fn test_identical_tours_yield_no_moves() {
    let tour = random_tour(40, 4);
    let decomposition = decompose_tours(&tour, &tour).unwrap();
    assert!(decomposition.is_empty());
    assert_eq!(decomposition.total_k(), 0);
    assert_eq!(decomposition.island_count(), 0);
}

#[test]
fn test_reversed_tour_yields_no_moves() {
    let tour = random_tour(40, 5);
    let decomposition = decompose_tours(&tour, &tour.reversed()).unwrap();
    assert!(decomposition.is_empty());
}

#[test]
fn test_single_two_opt() {
    let first = sequential_tour(9);
    let second = two_opt(&first, 2, 6);
    let decomposition = decompose_tours(&first, &second).unwrap();
    assert_eq!(decomposition.total_k(), 2);
    assert_eq!(decomposition.move_sizes(), vec![2]);
}

#[test]
fn test_disjoint_two_opts() {
    let first = sequential_tour(30);
    let second = two_opt(&two_opt(&first, 3, 7), 15, 22);
    let decomposition = decompose_tours(&first, &second).unwrap();
    assert_eq!(decomposition.total_k(), 4);
    assert_eq!(decomposition.island_count(), 2);
    assert_eq!(decomposition.move_sizes(), vec![2, 2]);
}

#[test]
fn test_junction_split_can_be_disabled() {
    let (first, second) = shared_vertex_two_opts();

    let split = decompose_tours(&first, &second).unwrap();
    assert_eq!(split.move_sizes(), vec![2, 2]);
    assert_eq!(split.island_count(), 1);

    let decomposer = Decomposer::new(DecomposeConfig::new().with_split_junctions(false));
    let whole = decomposer.decompose(&first, &second).unwrap();
    assert_eq!(whole.move_sizes(), vec![4]);
}

#[test]
fn test_full_assert_on_random_tours() {
    let decomposer = Decomposer::new(DecomposeConfig::new().with_assert_mode(AssertMode::Full));
    for seed in 0..20 {
        let first = random_tour(80, seed);
        let second = random_tour(80, seed + 500);
        let decomposition = decomposer.decompose(&first, &second).unwrap();

        let k: usize = decomposition.move_sizes().iter().sum();
        assert_eq!(k, decomposition.total_k());
        assert!(decomposition.move_count() >= decomposition.island_count());
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = Decomposer::default();
    let parallel = Decomposer::new(DecomposeConfig::new().with_parallel_islands(true));
    for seed in 0..5 {
        let first = random_tour(120, seed);
        let second = random_two_opts(&first, 15, seed);
        assert_eq!(
            sequential.decompose(&first, &second).unwrap(),
            parallel.decompose(&first, &second).unwrap()
        );
    }
}

#[test]
fn test_verify_partition_accepts_islands() {
    let first = random_tour(50, 8);
    let second = random_two_opts(&first, 5, 8);
    let difference = TourDifference::between(&first, &second).unwrap();
    let islands =
        split_difference(difference.first_exclusive(), difference.second_exclusive()).unwrap();
    assert!(verify_partition(&difference, &islands).is_ok());
}

#[test]
fn test_verify_partition_rejects_missing_edges() {
    let first = sequential_tour(20);
    let second = two_opt(&two_opt(&first, 2, 4), 10, 13);
    let difference = TourDifference::between(&first, &second).unwrap();
    let mut islands =
        split_difference(difference.first_exclusive(), difference.second_exclusive()).unwrap();
    islands.pop();

    assert_eq!(
        verify_partition(&difference, &islands),
        Err(TourDiffError::EdgeCountMismatch {
            expected: 8,
            actual: 4
        })
    );
}

#[test]
fn test_verify_partition_rejects_swapped_sides() {
    let first = sequential_tour(10);
    let second = two_opt(&first, 2, 5);
    let difference = TourDifference::between(&first, &second).unwrap();
    let (a, b) =
        split_difference(difference.first_exclusive(), difference.second_exclusive())
            .unwrap()
            .remove(0)
            .into_parts();
    let swapped = KMove::new(b, a);

    assert!(matches!(
        verify_partition(&difference, &[swapped]),
        Err(TourDiffError::ForeignEdge { .. })
    ));
}

#[test]
fn test_degenerate_tour_is_rejected() {
    let first = sequential_tour(6);
    let second = Tour::new(vec![1, 2, 3, 4, 5, 5]);
    assert_eq!(
        decompose_tours(&first, &second),
        Err(TourDiffError::SelfLoop { vertex: 5 })
    );
}

#[test]
fn test_tours_of_different_length_are_rejected() {
    let first = sequential_tour(7);
    let second = sequential_tour(5);
    assert!(matches!(
        decompose_tours(&first, &second),
        Err(TourDiffError::SizeMismatch { .. })
    ));
}

use super::*;

#[test]
fn test_shared_vertex_island_splits_in_two() {
    let (first, second) = shared_vertex_two_opts();
    let islands = islands_of(&first, &second);
    assert_eq!(islands.len(), 1);
    assert_eq!(islands[0].k(), 4);

    let moves = split_island(islands[0].clone()).unwrap();
    assert_eq!(
        moves,
        vec![
            KMove::new(vec![edge(1, 2), edge(4, 5)], vec![edge(1, 4), edge(2, 5)]),
            KMove::new(vec![edge(5, 6), edge(8, 9)], vec![edge(5, 8), edge(6, 9)]),
        ]
    );
}

#[test]
fn test_test_junction_finds_cycle() {
    let (first, second) = shared_vertex_two_opts();
    let island = islands_of(&first, &second).remove(0);
    let map = EdgeMap::from_edges(island.edges());

    assert_eq!(map.junctions(), vec![5]);
    let cycle = test_junction(&map, 5).unwrap();
    assert_eq!(cycle, vec![edge(4, 5), edge(1, 4), edge(1, 2), edge(2, 5)]);
}

#[test]
fn test_test_junction_ignores_plain_vertex() {
    let (first, second) = shared_vertex_two_opts();
    let island = islands_of(&first, &second).remove(0);
    let map = EdgeMap::from_edges(island.edges());
    assert_eq!(test_junction(&map, 4), None);
    assert_eq!(test_junction(&map, 100), None);
}

#[test]
fn test_island_without_junction_is_unchanged() {
    let first = sequential_tour(12);
    let second = double_bridge(&first, 2, 5, 9);
    let island = islands_of(&first, &second).remove(0);
    assert_eq!(island.k(), 3);

    let moves = split_island(island.clone()).unwrap();
    assert_eq!(moves, vec![island]);
}

#[test]
fn test_two_opt_is_unchanged() {
    let first = sequential_tour(8);
    let second = two_opt(&first, 1, 5);
    let island = islands_of(&first, &second).remove(0);
    assert_eq!(split_island(island.clone()).unwrap(), vec![island]);
}

#[test]
fn test_adjacent_junctions_stay_unsplit() {
    let island = adjacent_junction_island();
    let map = EdgeMap::from_edges(island.edges());
    assert_eq!(map.junctions(), vec![1, 2]);
    assert_eq!(test_junction(&map, 1), None);
    assert_eq!(test_junction(&map, 2), None);

    assert_eq!(split_island(island.clone()).unwrap(), vec![island]);
}

#[test]
fn test_odd_cycles_are_not_split() {
    let island = odd_junction_island();
    let map = EdgeMap::from_edges(island.edges());
    assert_eq!(test_junction(&map, 1).map(|c| c.len()), Some(3));

    assert_eq!(split_island(island.clone()).unwrap(), vec![island]);
}

#[test]
fn test_small_island_returned_early() {
    let island = KMove::new(vec![edge(1, 2)], vec![edge(2, 3)]);
    assert_eq!(split_island(island.clone()).unwrap(), vec![island]);
}

#[test]
fn test_unbalanced_island_is_rejected() {
    let island = KMove::new(vec![edge(1, 2), edge(3, 4)], vec![edge(1, 3)]);
    assert_eq!(
        split_island(island),
        Err(TourDiffError::UnbalancedMove { first: 2, second: 1 })
    );
}

#[test]
fn test_invalid_degree_is_rejected() {
    let island = KMove::new(vec![edge(1, 2), edge(3, 4)], vec![edge(2, 3), edge(3, 5)]);
    assert_eq!(
        split_island(island),
        Err(TourDiffError::InvalidDegree {
            vertex: 1,
            degree: 1
        })
    );
}

#[test]
fn test_split_preserves_edges() {
    for seed in 0..20 {
        let first = random_tour(50, seed);
        let second = random_tour(50, seed + 1000);
        for island in islands_of(&first, &second) {
            let moves = split_island(island.clone()).unwrap();

            let k: usize = moves.iter().map(KMove::k).sum();
            assert_eq!(k, island.k());

            let before: BTreeSet<Edge> = island.edges().copied().collect();
            let after: Vec<Edge> = moves.iter().flat_map(|m| m.edges().copied()).collect();
            assert_eq!(after.len(), before.len());
            assert_eq!(after.into_iter().collect::<BTreeSet<_>>(), before);

            let island_first: BTreeSet<Edge> = island.first().iter().copied().collect();
            for m in &moves {
                assert!(m.is_balanced());
                assert!(!m.is_empty());
                assert!(m.first().iter().all(|e| island_first.contains(e)));
            }
        }
    }
}

#[test]
fn test_split_is_idempotent_on_irreducible_moves() {
    let (first, second) = shared_vertex_two_opts();
    let island = islands_of(&first, &second).remove(0);
    for m in split_island(island).unwrap() {
        assert_eq!(split_island(m.clone()).unwrap(), vec![m]);
    }
}

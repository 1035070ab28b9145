//! Tour builders and perturbations.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourdiff_core::Tour;

/// Tour visiting `1..=n` in order.
pub fn sequential_tour(n: usize) -> Tour {
    Tour::new((1..=n).collect())
}

/// Reverses the positions `i..=j` of `tour` (a 2-opt move).
///
/// # Panics
///
/// Panics if `i > j` or `j` is out of range.
pub fn two_opt(tour: &Tour, i: usize, j: usize) -> Tour {
    let mut vertices = tour.vertices().to_vec();
    vertices[i..=j].reverse();
    Tour::new(vertices)
}

/// Swaps the segments `[a, b)` and `[b, c)` of `tour`.
///
/// With segments A = `[0, a)`, B = `[a, b)`, C = `[b, c)`, D = `[c, n)`
/// the result visits A C B D.
///
/// # Panics
///
/// Panics unless `a <= b <= c <= n`.
pub fn double_bridge(tour: &Tour, a: usize, b: usize, c: usize) -> Tour {
    let v = tour.vertices();
    let mut vertices = Vec::with_capacity(v.len());
    vertices.extend_from_slice(&v[..a]);
    vertices.extend_from_slice(&v[b..c]);
    vertices.extend_from_slice(&v[a..b]);
    vertices.extend_from_slice(&v[c..]);
    Tour::new(vertices)
}

/// Random permutation of `1..=n`, reproducible from `seed`.
pub fn random_tour(n: usize, seed: u64) -> Tour {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut vertices: Vec<usize> = (1..=n).collect();
    vertices.shuffle(&mut rng);
    Tour::new(vertices)
}

/// Applies `count` random 2-opt moves to `tour`, reproducible from `seed`.
pub fn random_two_opts(tour: &Tour, count: usize, seed: u64) -> Tour {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut result = tour.clone();
    let n = tour.len();
    if n < 4 {
        return result;
    }
    for _ in 0..count {
        let i = rng.random_range(1..n - 1);
        let j = rng.random_range(i + 1..n);
        result = two_opt(&result, i, j);
    }
    result
}

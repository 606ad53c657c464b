//! Tournament selection.
//!
//! Selection biases reproduction toward higher fitness without sorting
//! the population: sample a small group at random, keep the fittest.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Tournament selection over a fitness vector (maximization).
///
/// Draws `k` indices uniformly at random **with replacement** from
/// `0..fitness.len()` and returns the sampled index with the maximum
/// fitness. Consumes exactly `k` draws from `rng`.
///
/// Ties: when several sampled indices share the maximum fitness, the
/// first one in sample order wins (the comparison is strictly-greater,
/// so later ties never displace an earlier winner).
///
/// Higher `k` means stronger selection pressure:
/// - k=1: uniform random (no pressure)
/// - k=3-5: moderate pressure (typical default)
/// - k>5: strong pressure, risks premature convergence
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let n = fitness.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

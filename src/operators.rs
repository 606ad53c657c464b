//! Genetic operators for bit-string chromosomes.
//!
//! Pure building blocks of the generational loop: fitness evaluation,
//! one-point crossover, and independent per-bit mutation. Crossover and
//! mutation consume the shared RNG stream; fitness consumes none.

use crate::types::Chromosome;
use rand::Rng;

/// Fitness of a chromosome: `max_fitness − |ones − target_ones|`.
///
/// Peaks at `max_fitness` when the popcount equals `target_ones` and
/// falls off linearly on both sides. Pure and deterministic; all-zero
/// and all-one chromosomes are ordinary inputs.
///
/// The formula is applied as-is, with no clamping: a `target_ones` /
/// `max_fitness` pair outside the documented defaults can yield
/// negative fitness, and that is legal.
///
/// # Examples
///
/// ```
/// use bitga::Chromosome;
/// use bitga::operators::fitness;
///
/// let all_zero = Chromosome::from_bits(vec![false; 80]);
/// assert_eq!(fitness(&all_zero, 40, 80.0), 40.0);
/// ```
pub fn fitness(chromosome: &Chromosome, target_ones: usize, max_fitness: f64) -> f64 {
    let ones = chromosome.ones() as f64;
    max_fitness - (ones - target_ones as f64).abs()
}

/// One-point crossover.
///
/// Draws a split point uniformly from `1..length` (a genuine split,
/// never a whole-chromosome copy) and returns two children:
/// `child1 = parent1[..point] + parent2[point..]` and
/// `child2 = parent2[..point] + parent1[point..]`, split at the same
/// point. Parents are not modified. Consumes exactly one draw.
///
/// # Panics
/// Panics if the parents differ in length or are shorter than 2 bits.
pub fn one_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs an internal split point");

    let point = rng.random_range(1..n);

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1.bits()[..point]);
    child1.extend_from_slice(&parent2.bits()[point..]);
    child2.extend_from_slice(&parent2.bits()[..point]);
    child2.extend_from_slice(&parent1.bits()[point..]);

    (Chromosome::from_bits(child1), Chromosome::from_bits(child2))
}

/// Independent per-bit mutation, in place.
///
/// Flips each bit with probability `rate`; other bits are untouched.
/// Consumes exactly `chromosome.len()` draws, one per bit in order,
/// whether or not the bit flips. The caller owns the buffer and must
/// not pass an aliased elite.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for bit in chromosome.bits_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
}

//! Generational loop execution.
//!
//! [`GaRunner`] orchestrates the full evolutionary process:
//! initialization → evaluation → elitism → selection/breeding →
//! replacement, repeated for a fixed number of generations.
//!
//! # Reproducibility
//!
//! One seeded RNG drives the entire run and is consumed in a fixed
//! order: population initialization (bit by bit), then per generation
//! and per breeding iteration — tournament for parent 1, tournament for
//! parent 2, one crossover-decision draw, one split-point draw iff
//! crossover fires, per-bit mutation draws for child 1, and per-bit
//! mutation draws for child 2 only when child 2 is actually kept. When
//! a single offspring slot remains, the second child of a pair is
//! discarded before mutation and consumes no RNG state. Fitness
//! evaluation consumes none, which is what makes the `parallel` feature
//! safe: it parallelizes evaluation only.

use crate::config::GaConfig;
use crate::error::GaError;
use crate::operators::{bit_mutation, fitness, one_point_crossover};
use crate::rng::create_rng;
use crate::selection::tournament;
use crate::types::Chromosome;
use rand::Rng;

/// Best and mean fitness of one generation, recorded at evaluation
/// time. History entries are append-only and never revised.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Maximum fitness in the population.
    pub best_fitness: f64,

    /// Arithmetic mean fitness of the population.
    pub mean_fitness: f64,
}

/// Result of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Best individual of the terminal population (first index on ties).
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// One entry per generation run; length equals
    /// [`GaConfig::generations`].
    pub history: Vec<GenerationStats>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use bitga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(5);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.history.len(), 5);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, returning the best pattern found in the terminal
    /// population together with the per-generation fitness history.
    ///
    /// Fails fast with [`GaError`] if the configuration is invalid;
    /// once the loop starts it always completes, running exactly
    /// `config.generations` generations.
    pub fn run(config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with_observer(config, |_, _, _| {})
    }

    /// Runs the GA, invoking `observer` once per generation right after
    /// evaluation, with the generation index, the population, and its
    /// fitness vector.
    ///
    /// The observer sees every generation exactly as recorded in the
    /// history, which makes population-level invariants observable
    /// from the outside without changing the run itself.
    pub fn run_with_observer<F>(config: &GaConfig, mut observer: F) -> Result<GaResult, GaError>
    where
        F: FnMut(usize, &[Chromosome], &[f64]),
    {
        config.validate()?;

        let mut rng = create_rng(config.seed);

        // Init
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(config.chromosome_length, &mut rng))
            .collect();

        let mut history = Vec::with_capacity(config.generations);
        let offspring_target = config.population_size - config.elitism;

        for generation in 0..config.generations {
            // Evaluate
            let fitness_vec = evaluate_population(&population, config);
            let best_idx = argmax_first(&fitness_vec);
            history.push(GenerationStats {
                generation,
                best_fitness: fitness_vec[best_idx],
                mean_fitness: mean(&fitness_vec),
            });
            observer(generation, &population, &fitness_vec);

            // Elite extraction
            let elites = elite_indices(&fitness_vec, config.elitism);

            // SelectAndBreed
            let mut next_gen: Vec<Chromosome> = Vec::with_capacity(config.population_size);
            while next_gen.len() < offspring_target {
                let p1 = tournament(&fitness_vec, config.tournament_k, &mut rng);
                let p2 = tournament(&fitness_vec, config.tournament_k, &mut rng);

                let (mut child1, child2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    one_point_crossover(&population[p1], &population[p2], &mut rng)
                } else {
                    (population[p1].clone(), population[p2].clone())
                };

                bit_mutation(&mut child1, config.mutation_rate, &mut rng);
                next_gen.push(child1);

                if next_gen.len() < offspring_target {
                    let mut child2 = child2;
                    bit_mutation(&mut child2, config.mutation_rate, &mut rng);
                    next_gen.push(child2);
                }
                // Odd slot: child2 dropped unmutated, no RNG consumed.
            }

            // Replace: offspring first, elites appended verbatim.
            for &idx in &elites {
                next_gen.push(population[idx].clone());
            }
            population = next_gen;
        }

        // Finalize: one last evaluation of the terminal population.
        let fitness_vec = evaluate_population(&population, config);
        let best_idx = argmax_first(&fitness_vec);

        Ok(GaResult {
            best: population[best_idx].clone(),
            best_fitness: fitness_vec[best_idx],
            history,
        })
    }
}

/// Fitness of every individual, indexed like the population.
///
/// Evaluation is pure and consumes no RNG state, so the parallel
/// variant produces the identical vector.
#[cfg(feature = "parallel")]
fn evaluate_population(population: &[Chromosome], config: &GaConfig) -> Vec<f64> {
    use rayon::prelude::*;
    population
        .par_iter()
        .map(|c| fitness(c, config.target_ones, config.max_fitness))
        .collect()
}

/// Fitness of every individual, indexed like the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(population: &[Chromosome], config: &GaConfig) -> Vec<f64> {
    population
        .iter()
        .map(|c| fitness(c, config.target_ones, config.max_fitness))
        .collect()
}

/// Index of the maximum fitness; first index wins on ties.
fn argmax_first(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

fn mean(fitness: &[f64]) -> f64 {
    fitness.iter().sum::<f64>() / fitness.len() as f64
}

/// Indices of the `elitism` fittest individuals.
///
/// Stable descending sort by fitness: equal-fitness candidates keep
/// their ascending index order, so the selection is deterministic.
fn elite_indices(fitness: &[f64], elitism: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices.truncate(elitism);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_chromosome_length(16)
            .with_generations(10)
            .with_target_ones(8)
            .with_max_fitness(16.0)
            .with_elitism(3)
            .with_seed(42)
    }

    // ---- Helpers ----

    #[test]
    fn test_argmax_first_wins_ties() {
        assert_eq!(argmax_first(&[1.0, 5.0, 5.0, 2.0]), 1);
        assert_eq!(argmax_first(&[7.0, 7.0]), 0);
        assert_eq!(argmax_first(&[3.0]), 0);
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_elite_indices_descending() {
        assert_eq!(elite_indices(&[1.0, 9.0, 4.0, 7.0], 2), vec![1, 3]);
    }

    #[test]
    fn test_elite_indices_stable_on_ties() {
        // Equal fitness keeps ascending index order.
        assert_eq!(elite_indices(&[5.0, 5.0, 5.0, 5.0], 3), vec![0, 1, 2]);
        assert_eq!(elite_indices(&[2.0, 8.0, 8.0, 1.0], 2), vec![1, 2]);
    }

    #[test]
    fn test_elite_indices_zero_elitism() {
        assert!(elite_indices(&[1.0, 2.0], 0).is_empty());
    }

    // ---- Determinism ----

    #[test]
    fn test_run_is_deterministic() {
        let config = small_config();
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = GaRunner::run(&small_config().with_seed(1)).unwrap();
        let b = GaRunner::run(&small_config().with_seed(2)).unwrap();
        // Histories of 10 generations over different random streams
        // matching exactly would mean the seed is being ignored.
        assert_ne!(a.history, b.history);
    }

    // ---- Invalid configs fail fast ----

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_population_size(5).with_elitism(5);
        assert!(GaRunner::run(&config).is_err());
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert_eq!(
            GaRunner::run(&config).unwrap_err(),
            GaError::RateOutOfRange {
                name: "mutation_rate",
                value: 1.5
            }
        );
    }

    // ---- History ----

    #[test]
    fn test_history_length_equals_generations() {
        let result = GaRunner::run(&small_config()).unwrap();
        assert_eq!(result.history.len(), 10);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.mean_fitness <= stats.best_fitness);
        }
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let config = small_config().with_generations(0);
        let result = GaRunner::run(&config).unwrap();
        assert!(result.history.is_empty());
        assert_eq!(result.best.len(), 16);
        assert!(result.best_fitness <= 16.0);
    }

    // ---- Population invariants (via observer) ----

    #[test]
    fn test_population_size_invariant_every_generation() {
        let config = small_config();
        let mut seen = 0;
        GaRunner::run_with_observer(&config, |generation, population, fitness| {
            assert_eq!(generation, seen);
            assert_eq!(population.len(), 30);
            assert_eq!(fitness.len(), 30);
            for c in population {
                assert_eq!(c.len(), 16);
            }
            seen += 1;
        })
        .unwrap();
        assert_eq!(seen, 10);
    }

    #[test]
    fn test_population_size_invariant_with_odd_offspring_count() {
        // 11 − 2 = 9 offspring: the last breeding pair overfills and
        // the second child is discarded.
        let config = small_config().with_population_size(11).with_elitism(2);
        GaRunner::run_with_observer(&config, |_, population, _| {
            assert_eq!(population.len(), 11);
        })
        .unwrap();
    }

    #[test]
    fn test_elites_carried_bit_identical() {
        let config = small_config();
        let mut generations: Vec<(Vec<Chromosome>, Vec<f64>)> = Vec::new();
        GaRunner::run_with_observer(&config, |_, population, fitness| {
            generations.push((population.to_vec(), fitness.to_vec()));
        })
        .unwrap();

        for window in generations.windows(2) {
            let (prev_pop, prev_fit) = &window[0];
            let (next_pop, _) = &window[1];
            for &idx in &elite_indices(prev_fit, config.elitism) {
                assert!(
                    next_pop.contains(&prev_pop[idx]),
                    "elite of one generation missing from the next"
                );
            }
        }
    }

    #[test]
    fn test_elite_floor_never_drops() {
        // With elitism >= 1 the best of a generation is carried
        // verbatim, so per-generation best fitness cannot regress.
        let result = GaRunner::run(&small_config()).unwrap();
        for window in result.history.windows(2) {
            assert!(
                window[1].best_fitness >= window[0].best_fitness,
                "best fitness dropped below the elite-carried floor: {} < {}",
                window[1].best_fitness,
                window[0].best_fitness
            );
        }
    }

    // ---- Full-scale scenario ----

    #[test]
    fn test_elite_floor_scenario_default_parameters() {
        // seed=42, population=300, length=80, elitism=2, 50 generations.
        let config = GaConfig::default();
        let result = GaRunner::run(&config).unwrap();

        assert_eq!(result.history.len(), 50);
        assert!(result.best_fitness >= result.history[0].best_fitness);
        assert!(result.best_fitness <= config.max_fitness);
        assert_eq!(result.best.len(), 80);
    }

    #[test]
    fn test_converges_toward_target_popcount() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_chromosome_length(20)
            .with_generations(30)
            .with_target_ones(10)
            .with_max_fitness(20.0)
            .with_seed(42);
        let result = GaRunner::run(&config).unwrap();
        assert!(
            result.best_fitness >= 19.0,
            "expected near-optimal popcount, got fitness {}",
            result.best_fitness
        );
        let ones = result.best.ones() as i64;
        assert!((ones - 10).unsigned_abs() <= 1, "popcount {ones} far from target");
    }

    #[test]
    fn test_mean_never_exceeds_best() {
        let result = GaRunner::run(&small_config()).unwrap();
        for stats in &result.history {
            assert!(stats.mean_fitness <= stats.best_fitness + 1e-12);
        }
    }

    #[test]
    fn test_zero_crossover_rate_still_fills_population() {
        let config = small_config().with_crossover_rate(0.0);
        GaRunner::run_with_observer(&config, |_, population, _| {
            assert_eq!(population.len(), 30);
        })
        .unwrap();
    }

    #[test]
    fn test_zero_elitism_runs() {
        let config = small_config().with_elitism(0);
        let result = GaRunner::run(&config).unwrap();
        assert_eq!(result.history.len(), 10);
    }
}

//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. Nothing is read from
//! process-wide state: the config value plus the seed fully determine
//! the run.

use crate::error::GaError;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// The defaults reproduce the fixed-parameter bit-pattern search:
/// 300 individuals of 80 bits, 50 generations, fitness peaking at
/// 40 ones with a maximum of 80.
///
/// ```
/// use bitga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 300);
/// assert_eq!(config.chromosome_length, 80);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_tournament_k(5)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders do not clamp or correct values; out-of-range settings are
/// reported by [`validate`](Self::validate), which the runner calls
/// before any generation executes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in each generation.
    pub population_size: usize,

    /// Number of bits per chromosome. At least 2, so one-point
    /// crossover always has an internal split point.
    pub chromosome_length: usize,

    /// Exact number of generations to run. The loop never terminates
    /// early, even if an optimal pattern appears.
    pub generations: usize,

    /// Popcount at which fitness peaks.
    pub target_ones: usize,

    /// Fitness of a chromosome with exactly `target_ones` set bits.
    ///
    /// The fitness formula `max_fitness − |ones − target_ones|` is not
    /// clamped; pairs outside the documented defaults can produce
    /// negative fitness, which is accepted as-is.
    pub max_fitness: f64,

    /// Probability that a parent pair is recombined (0.0–1.0).
    /// Otherwise both parents are copied unchanged into the offspring.
    pub crossover_rate: f64,

    /// Independent per-bit flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Tournament size: how many individuals are sampled (with
    /// replacement) per parent selection.
    pub tournament_k: usize,

    /// Number of top individuals copied verbatim into the next
    /// generation, exempt from crossover and mutation.
    pub elitism: usize,

    /// Seed of the run's single RNG. Same seed, same run.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            chromosome_length: 80,
            generations: 50,
            target_ones: 40,
            max_fitness: 80.0,
            crossover_rate: 0.9,
            mutation_rate: 0.01,
            tournament_k: 3,
            elitism: 2,
            seed: 42,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the popcount at which fitness peaks.
    pub fn with_target_ones(mut self, n: usize) -> Self {
        self.target_ones = n;
        self
    }

    /// Sets the peak fitness value.
    pub fn with_max_fitness(mut self, f: f64) -> Self {
        self.max_fitness = f;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_k(mut self, k: usize) -> Self {
        self.tournament_k = k;
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// All checks run before any generation; a run either fails here or
    /// completes.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.elitism >= self.population_size {
            return Err(GaError::ElitismTooLarge {
                elitism: self.elitism,
                population_size: self.population_size,
            });
        }
        if self.tournament_k < 1 || self.tournament_k > self.population_size {
            return Err(GaError::TournamentSizeOutOfRange {
                tournament_k: self.tournament_k,
                population_size: self.population_size,
            });
        }
        if self.chromosome_length < 2 {
            return Err(GaError::ChromosomeTooShort(self.chromosome_length));
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GaError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

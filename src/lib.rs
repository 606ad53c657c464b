//! Fixed-parameter binary genetic algorithm.
//!
//! Evolves a population of fixed-length bit strings toward a target
//! number of set bits. Fitness of a chromosome is
//! `max_fitness − |ones − target_ones|`, so the search peaks at patterns
//! whose popcount equals `target_ones`.
//!
//! The evolutionary loop runs for a fixed number of generations
//! (no early termination) with tournament selection, one-point
//! crossover, independent per-bit mutation, and elitism. All randomness
//! flows through a single seeded RNG consumed in a documented order, so
//! a run is bit-for-bit reproducible from its seed.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population size, rates, seed)
//! - [`Chromosome`]: A fixed-length bit string candidate
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best pattern found plus per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Fitness, one-point crossover, per-bit mutation
//! - [`selection`]: Tournament selection over a fitness vector
//! - [`rng`]: Seeded deterministic RNG construction
//!
//! # Example
//!
//! ```
//! use bitga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_population_size(60)
//!     .with_generations(10)
//!     .with_seed(42);
//! let result = GaRunner::run(&config).unwrap();
//! assert_eq!(result.history.len(), 10);
//! println!("{} (fitness {})", result.best, result.best_fitness);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
pub mod rng;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::Chromosome;

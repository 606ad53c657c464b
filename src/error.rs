//! Error types.
//!
//! The only failure mode is an invalid configuration: every operator is
//! total over its valid input domain, so nothing can fail once a run
//! has started. [`GaConfig::validate`](crate::GaConfig::validate) runs
//! all checks before any generation executes.

use thiserror::Error;

/// Configuration-validity errors, reported before a run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Elites must leave room for at least one offspring slot.
    #[error("elitism ({elitism}) must be smaller than population_size ({population_size})")]
    ElitismTooLarge {
        elitism: usize,
        population_size: usize,
    },

    /// Tournament size must be able to sample the population.
    #[error("tournament_k ({tournament_k}) must be in 1..=population_size ({population_size})")]
    TournamentSizeOutOfRange {
        tournament_k: usize,
        population_size: usize,
    },

    /// One-point crossover needs an internal split point.
    #[error("chromosome_length ({0}) must be at least 2")]
    ChromosomeTooShort(usize),

    /// Probabilities must lie in `[0, 1]`.
    #[error("{name} ({value}) must lie in [0, 1]")]
    RateOutOfRange { name: &'static str, value: f64 },
}

//! Per-generation diagnostics.
//!
//! [`GenerationStats`] records are produced by the runner when
//! [`GaConfig::record_history`](super::GaConfig::record_history) is set and
//! are meant for an external logger or persister.

use crate::eval::Scored;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index; 0 is the initial random population.
    pub generation: usize,

    /// Best value observed so far across all generations.
    pub best_value: u64,

    /// Best value within this generation.
    pub population_best: u64,

    /// Mean value within this generation.
    pub population_mean: f64,

    /// Worst value within this generation.
    pub population_worst: u64,

    /// Number of feasible candidates in this generation.
    pub feasible_count: usize,

    /// Fraction of distinct candidates, in `(0, 1]`.
    pub diversity: f64,
}

impl GenerationStats {
    /// Summarizes `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population(generation: usize, best_value: u64, population: &[Scored]) -> Self {
        assert!(!population.is_empty(), "population must not be empty");

        let values = population.iter().map(Scored::value);
        // Summed in f64: a population of near-i64::MAX values overflows u64.
        let total: f64 = values.clone().map(|v| v as f64).sum();

        Self {
            generation,
            best_value,
            population_best: values.clone().max().unwrap_or(0),
            population_mean: total / population.len() as f64,
            population_worst: values.min().unwrap_or(0),
            feasible_count: population.iter().filter(|m| m.evaluation.feasible).count(),
            diversity: diversity(population),
        }
    }
}

/// Fraction of distinct candidates in `population`.
///
/// Returns 0.0 for an empty population.
pub fn diversity(population: &[Scored]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<_> = population.iter().map(|m| &m.candidate).collect();
    distinct.len() as f64 / population.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::instance::Instance;

    fn classic() -> Instance {
        Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap()
    }

    fn scored(inst: &Instance, s: &str) -> Scored {
        Scored::new(inst, Candidate::from_bits(s.chars().map(|c| c == '1').collect()))
    }

    #[test]
    fn test_stats_from_population() {
        let inst = classic();
        let pop = vec![
            scored(&inst, "011"), // 220
            scored(&inst, "111"), // infeasible, 0
            scored(&inst, "100"), // 60
            scored(&inst, "011"), // duplicate
        ];
        let stats = GenerationStats::from_population(3, 220, &pop);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.best_value, 220);
        assert_eq!(stats.population_best, 220);
        assert_eq!(stats.population_worst, 0);
        assert!((stats.population_mean - 125.0).abs() < 1e-9);
        assert_eq!(stats.feasible_count, 3);
        assert!((stats.diversity - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_mean_of_large_values() {
        let inst = Instance::new(vec![i64::MAX as u64], vec![1], 1).unwrap();
        let pop = vec![scored(&inst, "1"); 4];
        let stats = GenerationStats::from_population(0, i64::MAX as u64, &pop);
        assert!((stats.population_mean - i64::MAX as f64).abs() <= 1.0);
    }

    #[test]
    fn test_diversity_bounds() {
        let inst = classic();
        let same = vec![scored(&inst, "101"); 5];
        assert!((diversity(&same) - 0.2).abs() < 1e-9);
        assert_eq!(diversity(&[]), 0.0);
    }
}

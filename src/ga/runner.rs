//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elite selection → crossover/mutation →
//! replacement → repeat.

use super::config::{CrossoverKind, GaConfig, OddElitePolicy, RefillPolicy};
use super::operators::{bit_flip_mutation, mutated, random_crossover, uniform_crossover};
use super::selection::{best_index, select_elites};
use super::types::GenerationStats;
use crate::candidate::Candidate;
use crate::error::KnapsackError;
use crate::eval::{Evaluation, Scored};
use crate::instance::Instance;
use crate::random::rng_from_option;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best candidate observed during the entire run.
    pub best: Candidate,

    /// Evaluation of `best`.
    pub best_evaluation: Evaluation,

    /// Best candidate of the final population.
    pub last: Candidate,

    /// Evaluation of `last`.
    pub last_evaluation: Evaluation,

    /// Number of generations executed.
    pub generations: usize,

    /// Tracked best value after initialization and after each generation.
    ///
    /// Never decreases.
    pub best_history: Vec<u64>,

    /// Per-generation statistics; empty unless `record_history` is set.
    pub stats: Vec<GenerationStats>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::Instance;
/// use u_knapsack::ga::{GaConfig, GaRunner};
///
/// let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// let config = GaConfig::default().with_max_generations(200).with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert!(result.best_evaluation.value <= 220);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult, KnapsackError> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, KnapsackError> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        let n = instance.len();
        debug!(
            items = n,
            population = config.population_size,
            generations = config.max_generations,
            elites = config.elite_count,
            crossover = ?config.crossover,
            "starting genetic algorithm"
        );

        // 1. Initialize and evaluate
        let initial = initial_population(n, config, rng);
        let mut population = evaluate_population(instance, initial, config.parallel);

        // 2. Track best
        let mut best = population[best_index(&population)].clone();
        let mut best_history = Vec::with_capacity(config.max_generations + 1);
        best_history.push(best.value());

        let mut stats = Vec::new();
        if config.record_history {
            stats.push(GenerationStats::from_population(0, best.value(), &population));
        }

        // 3. Generational loop
        for gen in 1..=config.max_generations {
            let rate = config.mutation_rate_at(gen);
            let children = reproduce(&population, &best, config, rate, rng);
            population = evaluate_population(instance, children, config.parallel);

            let gen_best = &population[best_index(&population)];
            if gen_best.value() > best.value() {
                best = gen_best.clone();
                debug!(generation = gen, value = best.value(), "new best");
            }
            best_history.push(best.value());

            if config.record_history {
                stats.push(GenerationStats::from_population(gen, best.value(), &population));
            }
            trace!(
                generation = gen,
                best = best.value(),
                population_best = gen_best.value(),
                "generation complete"
            );
        }

        let last = population.swap_remove(best_index(&population));
        debug!(
            value = best.value(),
            size = best.evaluation.size,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best: best.candidate,
            best_evaluation: best.evaluation,
            last: last.candidate,
            last_evaluation: last.evaluation,
            generations: config.max_generations,
            best_history,
            stats,
        })
    }
}

/// Draws the first generation.
///
/// With `distinct_initial`, candidates are redrawn until they are pairwise
/// distinct or all `2^n` candidates are present.
fn initial_population<R: Rng>(n: usize, config: &GaConfig, rng: &mut R) -> Vec<Candidate> {
    let size = config.population_size;
    if !config.distinct_initial {
        return (0..size).map(|_| Candidate::random(n, rng)).collect();
    }

    let distinct = match u32::try_from(n).ok().and_then(|bits| 1usize.checked_shl(bits)) {
        Some(space) => size.min(space),
        None => size,
    };
    let mut seen = HashSet::with_capacity(distinct);
    let mut population = Vec::with_capacity(size);
    while population.len() < distinct {
        let candidate = Candidate::random(n, rng);
        if seen.insert(candidate.clone()) {
            population.push(candidate);
        }
    }
    while population.len() < size {
        population.push(Candidate::random(n, rng));
    }
    population
}

/// Mutates an offspring, then possibly swaps it for a random immigrant.
fn offspring<R: Rng>(mut child: Candidate, rate: f64, config: &GaConfig, rng: &mut R) -> Candidate {
    bit_flip_mutation(&mut child, rate, rng);
    if config.immigrant_rate > 0.0 && rng.random_bool(config.immigrant_rate) {
        return Candidate::random(child.len(), rng);
    }
    child
}

/// Builds the next generation's candidates from the current population.
///
/// Elites are paired in rank order (0&1, 2&3, ...); each pair yields two
/// crossover children, mutated at `rate`. The remaining slots are filled per
/// [`RefillPolicy`]. Crossover children and refills are subject to random
/// immigration; a carried or mutated odd elite is not.
fn reproduce<R: Rng>(
    population: &[Scored],
    best: &Scored,
    config: &GaConfig,
    rate: f64,
    rng: &mut R,
) -> Vec<Candidate> {
    let elites: Vec<&Candidate> = select_elites(population, config.elite_count)
        .into_iter()
        .map(|i| &population[i].candidate)
        .collect();

    let mut next = Vec::with_capacity(config.population_size);

    for pair in elites.chunks(2) {
        match pair {
            [p1, p2] => {
                let (a, b) = match config.crossover {
                    CrossoverKind::SinglePoint => random_crossover(p1, p2, rng),
                    CrossoverKind::Uniform => uniform_crossover(p1, p2, rng),
                };
                next.push(offspring(a, rate, config, rng));
                next.push(offspring(b, rate, config, rng));
            }
            [single] => match config.odd_elite {
                OddElitePolicy::Carry => next.push((*single).clone()),
                OddElitePolicy::Mutate => next.push(mutated(single, rate, rng)),
            },
            _ => unreachable!("chunks(2) yields one or two elements"),
        }
    }

    while next.len() < config.population_size {
        let parent = match config.refill {
            RefillPolicy::RandomElite => elites[rng.random_range(0..elites.len())],
            RefillPolicy::Best => &best.candidate,
        };
        next.push(offspring(parent.clone(), rate, config, rng));
    }
    next.truncate(config.population_size);
    next
}

/// Evaluates every candidate.
fn evaluate_population(instance: &Instance, candidates: Vec<Candidate>, parallel: bool) -> Vec<Scored> {
    #[cfg(feature = "parallel")]
    if parallel {
        return candidates
            .into_par_iter()
            .map(|c| Scored::new(instance, c))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    candidates
        .into_iter()
        .map(|c| Scored::new(instance, c))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

//! SA execution loop.

use super::config::SaConfig;
use super::types::IterationRecord;
use crate::candidate::Candidate;
use crate::error::KnapsackError;
use crate::eval::Evaluation;
use crate::instance::Instance;
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best candidate found.
    pub best: Candidate,

    /// Evaluation of `best`.
    pub best_evaluation: Evaluation,

    /// Where the walk ended.
    pub current: Candidate,

    /// Evaluation of `current`.
    pub current_evaluation: Evaluation,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best value after each iteration; empty unless `record_history` is set.
    pub best_history: Vec<u64>,

    /// Per-iteration records; empty unless `record_history` is set.
    pub trace: Vec<IterationRecord>,
}

/// Executes simulated annealing over single-bit flips.
///
/// The walk starts from the empty selection. Each iteration flips one
/// uniformly chosen bit; improving neighbors are always accepted, others
/// with probability `exp(Δ / T)`.
///
/// # Usage
///
/// ```
/// use u_knapsack::Instance;
/// use u_knapsack::sa::{CoolingSchedule, SaConfig, SaRunner};
///
/// let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// let config = SaConfig::default()
///     .with_cooling(CoolingSchedule::Exponential { rate: 0.98 })
///     .with_seed(42);
/// let result = SaRunner::run(&instance, &config).unwrap();
/// assert!(result.best_evaluation.value <= 220);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run(instance: &Instance, config: &SaConfig) -> Result<SaResult, KnapsackError> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, KnapsackError> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        let n = instance.len();
        let t0 = config.initial_temperature;
        let floor = config.min_temperature;
        debug!(
            items = n,
            initial_temperature = t0,
            min_temperature = floor,
            cooling = ?config.cooling,
            "starting simulated annealing"
        );

        // Initialize
        let mut current = Candidate::zeros(n);
        let mut current_eval = instance.evaluate(&current);
        let mut best = current.clone();
        let mut best_eval = current_eval;

        let mut temperature = config.cooling.initial(t0);
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut best_history = Vec::new();
        let mut trace = Vec::new();

        while temperature > floor {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            // Propose
            let neighbor = current.flipped(rng.random_range(0..n));
            let neighbor_eval = instance.evaluate(&neighbor);
            let delta = neighbor_eval.value as i64 - current_eval.value as i64;

            // Metropolis acceptance criterion
            let accept = if delta > 0 {
                improving_moves += 1;
                true
            } else {
                let probability = (delta as f64 / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = neighbor;
                current_eval = neighbor_eval;
                accepted_moves += 1;

                if current_eval.value > best_eval.value {
                    best = current.clone();
                    best_eval = current_eval;
                    debug!(iteration = iterations, value = best_eval.value, "new best");
                }
            }

            if config.record_history {
                best_history.push(best_eval.value);
                trace.push(IterationRecord {
                    iteration: iterations,
                    current_value: current_eval.value,
                    temperature,
                    best: best.clone(),
                });
            }
            trace!(
                iteration = iterations,
                current = current_eval.value,
                temperature,
                accepted = accept,
                "iteration"
            );

            iterations += 1;

            // Cool down
            temperature = config.cooling.next(t0, iterations, temperature, floor);
        }

        debug!(
            iterations,
            value = best_eval.value,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_evaluation: best_eval,
            current,
            current_evaluation: current_eval,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            best_history,
            trace,
        })
    }
}

//! Repeated independent trials.
//!
//! [`RunDriver`] runs a [`Heuristic`] several times on the same instance,
//! each trial with its own generator seeded by
//! [`trial_seed`](crate::random::trial_seed), and aggregates the best and
//! last solution of every trial. Trials share nothing but the read-only
//! instance, so with the `parallel` feature they run on the rayon pool and
//! produce the same summary as a sequential run.

use crate::error::KnapsackError;
use crate::eval::Scored;
use crate::ga::{GaConfig, GaRunner};
use crate::instance::Instance;
use crate::random::{create_rng, trial_seed};
use crate::sa::{SaConfig, SaRunner};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A search procedure the driver can repeat.
pub trait Heuristic: Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs once and returns `(best, last)`.
    ///
    /// `last` is whatever the procedure ends on: the best member of the
    /// final population, or the final state of a walk.
    fn solve(&self, instance: &Instance, rng: &mut StdRng) -> Result<(Scored, Scored), KnapsackError>;
}

impl Heuristic for GaConfig {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn solve(&self, instance: &Instance, rng: &mut StdRng) -> Result<(Scored, Scored), KnapsackError> {
        let result = GaRunner::run_with_rng(instance, self, rng)?;
        Ok((
            Scored {
                candidate: result.best,
                evaluation: result.best_evaluation,
            },
            Scored {
                candidate: result.last,
                evaluation: result.last_evaluation,
            },
        ))
    }
}

impl Heuristic for SaConfig {
    fn name(&self) -> &'static str {
        "annealing"
    }

    fn solve(&self, instance: &Instance, rng: &mut StdRng) -> Result<(Scored, Scored), KnapsackError> {
        let result = SaRunner::run_with_rng(instance, self, rng)?;
        Ok((
            Scored {
                candidate: result.best,
                evaluation: result.best_evaluation,
            },
            Scored {
                candidate: result.current,
                evaluation: result.current_evaluation,
            },
        ))
    }
}

/// Outcome of one trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Trial index.
    pub trial: usize,

    /// Seed the trial's generator was built from.
    pub seed: u64,

    /// Best solution of the trial.
    pub best: Scored,

    /// Final solution of the trial.
    pub last: Scored,
}

/// Aggregate over all trials, in trial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    pub outcomes: Vec<TrialOutcome>,
}

impl TrialSummary {
    /// The trial with the highest best value; the earliest trial wins ties.
    pub fn best(&self) -> Option<&TrialOutcome> {
        self.outcomes
            .iter()
            .reduce(|acc, o| if o.best.value() > acc.best.value() { o } else { acc })
    }

    /// Best value of every trial, in trial order.
    pub fn best_values(&self) -> Vec<u64> {
        self.outcomes.iter().map(|o| o.best.value()).collect()
    }

    /// Last value of every trial, in trial order.
    pub fn last_values(&self) -> Vec<u64> {
        self.outcomes.iter().map(|o| o.last.value()).collect()
    }

    /// Mean of the per-trial best values (0.0 when there are no trials).
    pub fn mean_best_value(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.outcomes.iter().map(|o| o.best.value() as f64).sum();
        total / self.outcomes.len() as f64
    }

    /// Fraction of trials whose best value reached `target`.
    pub fn hit_rate(&self, target: u64) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let hits = self
            .outcomes
            .iter()
            .filter(|o| o.best.value() >= target)
            .count();
        hits as f64 / self.outcomes.len() as f64
    }
}

/// Runs a heuristic over independent seeded trials.
///
/// # Examples
///
/// ```
/// use u_knapsack::driver::RunDriver;
/// use u_knapsack::ga::GaConfig;
/// use u_knapsack::Instance;
///
/// let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// let config = GaConfig::default().with_max_generations(50);
/// let summary = RunDriver::new(5).with_seed(1).run(&instance, &config).unwrap();
/// assert_eq!(summary.outcomes.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct RunDriver {
    /// Number of trials.
    pub trials: usize,

    /// Base seed; trial `i` uses `trial_seed(seed, i)`.
    pub seed: u64,

    /// Whether to run trials on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl RunDriver {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            seed: 0,
            parallel: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs all trials and collects their outcomes in trial order.
    ///
    /// Stops at the first failing trial.
    pub fn run<H: Heuristic>(
        &self,
        instance: &Instance,
        heuristic: &H,
    ) -> Result<TrialSummary, KnapsackError> {
        if self.trials == 0 {
            return Err(KnapsackError::InvalidConfig(
                "trials must be at least 1".into(),
            ));
        }
        debug!(
            heuristic = heuristic.name(),
            trials = self.trials,
            seed = self.seed,
            "starting trials"
        );

        let run_trial = |trial: usize| -> Result<TrialOutcome, KnapsackError> {
            let seed = trial_seed(self.seed, trial);
            let mut rng = create_rng(seed);
            let (best, last) = heuristic.solve(instance, &mut rng)?;
            Ok(TrialOutcome {
                trial,
                seed,
                best,
                last,
            })
        };

        #[cfg(feature = "parallel")]
        let outcomes = if self.parallel {
            (0..self.trials)
                .into_par_iter()
                .map(run_trial)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..self.trials)
                .map(run_trial)
                .collect::<Result<Vec<_>, _>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes = (0..self.trials)
            .map(run_trial)
            .collect::<Result<Vec<_>, _>>()?;

        let summary = TrialSummary { outcomes };
        debug!(
            heuristic = heuristic.name(),
            mean_best = summary.mean_best_value(),
            "trials finished"
        );
        Ok(summary)
    }
}

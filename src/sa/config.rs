//! SA configuration.

use super::cooling::CoolingSchedule;

/// Configuration for the simulated annealing run.
///
/// # Examples
///
/// ```
/// use u_knapsack::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling(CoolingSchedule::Exponential { rate: 0.98 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature `T_0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stopping threshold ε. The loop runs while the temperature exceeds it.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Whether to collect per-iteration records and best-value history.
    pub record_history: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-4,
            cooling: CoolingSchedule::default(),
            max_iterations: 0,
            record_history: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Upper bound on the iterations this configuration can run.
    pub fn iteration_bound(&self) -> usize {
        let natural = self
            .cooling
            .steps_to_freeze(self.initial_temperature, self.min_temperature)
            .saturating_add(1);
        if self.max_iterations > 0 {
            natural.min(self.max_iterations)
        } else {
            natural
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        self.cooling.validate()
    }
}

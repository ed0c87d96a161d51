//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

/// What happens to the last elite when the elite count is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddElitePolicy {
    /// Copy the unpaired elite into the next generation unchanged.
    #[default]
    Carry,

    /// Copy the unpaired elite and apply bit-flip mutation to the copy.
    Mutate,
}

/// How the slots left after crossover are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefillPolicy {
    /// Mutated copy of an elite drawn uniformly at random.
    #[default]
    RandomElite,

    /// Mutated copy of the best candidate observed so far.
    Best,
}

/// Crossover operator applied to each elite pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverKind {
    /// Exchange tails at one uniformly drawn interior cut.
    #[default]
    SinglePoint,

    /// Decide every locus independently by a fair coin.
    Uniform,
}

/// One-step drop of the mutation rate partway through a run.
///
/// Generations are numbered from 1. Generations up to and including
/// `after_generation` mutate at [`GaConfig::mutation_rate`]; later ones
/// at `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationDecay {
    /// Last generation that uses the initial rate.
    pub after_generation: usize,

    /// Per-bit flip probability from then on.
    pub rate: f64,
}

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.elite_count, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::{GaConfig, RefillPolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_elite_count(10)
///     .with_mutation_rate(0.02)
///     .with_refill(RefillPolicy::Best)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of candidates in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Number of top-ranked candidates used as parents (`1..population_size`).
    pub elite_count: usize,

    /// Per-bit flip probability applied to offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Optional later, usually lower, mutation rate.
    pub mutation_decay: Option<MutationDecay>,

    /// Crossover operator.
    pub crossover: CrossoverKind,

    /// Probability that a mutated offspring is replaced by a fresh random
    /// candidate (random immigrant). 0 disables immigration.
    pub immigrant_rate: f64,

    /// Whether the initial population is drawn without duplicates.
    ///
    /// When the instance has fewer than `population_size` distinct
    /// candidates, all of them are included and the rest are drawn freely.
    pub distinct_initial: bool,

    /// Treatment of the unpaired elite when `elite_count` is odd.
    pub odd_elite: OddElitePolicy,

    /// Source of the candidates that fill the generation after crossover.
    pub refill: RefillPolicy,

    /// Whether to collect [`GenerationStats`](super::GenerationStats) per generation.
    pub record_history: bool,

    /// Whether to evaluate offspring on the rayon pool.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation is pure,
    /// so results do not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_generations: 1000,
            elite_count: 5,
            mutation_rate: 0.01,
            mutation_decay: None,
            crossover: CrossoverKind::default(),
            immigrant_rate: 0.0,
            distinct_initial: false,
            odd_elite: OddElitePolicy::default(),
            refill: RefillPolicy::default(),
            record_history: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Switches to `rate` after generation `after_generation`.
    pub fn with_mutation_decay(mut self, after_generation: usize, rate: f64) -> Self {
        self.mutation_decay = Some(MutationDecay {
            after_generation,
            rate: rate.clamp(0.0, 1.0),
        });
        self
    }

    pub fn with_crossover(mut self, kind: CrossoverKind) -> Self {
        self.crossover = kind;
        self
    }

    /// Sets the random-immigrant probability.
    pub fn with_immigrant_rate(mut self, rate: f64) -> Self {
        self.immigrant_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_distinct_initial(mut self, distinct: bool) -> Self {
        self.distinct_initial = distinct;
        self
    }

    pub fn with_odd_elite(mut self, policy: OddElitePolicy) -> Self {
        self.odd_elite = policy;
        self
    }

    pub fn with_refill(mut self, policy: RefillPolicy) -> Self {
        self.refill = policy;
        self
    }

    /// Enables or disables per-generation statistics.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small instances: 20 candidates, 200 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 20,
            max_generations: 200,
            elite_count: 6,
            ..Self::default()
        }
    }

    /// Preset for medium instances: 60 candidates, 500 generations.
    pub fn balanced() -> Self {
        Self {
            population_size: 60,
            max_generations: 500,
            elite_count: 12,
            ..Self::default()
        }
    }

    /// Preset for large instances: 120 candidates, 1000 generations.
    pub fn quality() -> Self {
        Self {
            population_size: 120,
            max_generations: 1000,
            elite_count: 24,
            mutation_rate: 0.005,
            ..Self::default()
        }
    }

    /// Diversity-oriented preset: uniform crossover, a duplicate-free start,
    /// 10% random immigrants, and mutation dropping from 0.2 to 0.05 after
    /// generation 21.
    pub fn exploratory() -> Self {
        Self {
            population_size: 20,
            max_generations: 200,
            elite_count: 10,
            mutation_rate: 0.2,
            mutation_decay: Some(MutationDecay {
                after_generation: 21,
                rate: 0.05,
            }),
            crossover: CrossoverKind::Uniform,
            immigrant_rate: 0.1,
            distinct_initial: true,
            ..Self::default()
        }
    }

    /// Mutation rate in effect for `generation` (numbered from 1).
    pub fn mutation_rate_at(&self, generation: usize) -> f64 {
        match self.mutation_decay {
            Some(decay) if generation > decay.after_generation => decay.rate,
            _ => self.mutation_rate,
        }
    }

    /// Selects a preset from the item count.
    ///
    /// - `items < 30` → [`fast()`](Self::fast)
    /// - `30 ≤ items < 150` → [`balanced()`](Self::balanced)
    /// - `items ≥ 150` → [`quality()`](Self::quality)
    pub fn auto_select(items: usize) -> Self {
        if items < 30 {
            Self::fast()
        } else if items < 150 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elite_count == 0 {
            return Err("elite_count must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if let Some(decay) = self.mutation_decay {
            if !(0.0..=1.0).contains(&decay.rate) {
                return Err(format!(
                    "decayed mutation rate must be in [0, 1], got {}",
                    decay.rate
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.immigrant_rate) {
            return Err(format!(
                "immigrant_rate must be in [0, 1], got {}",
                self.immigrant_rate
            ));
        }
        Ok(())
    }
}

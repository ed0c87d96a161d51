//! Stochastic heuristics for the 0/1 knapsack problem.
//!
//! Given items with positive values and sizes and a knapsack capacity,
//! choose a subset of maximum total value whose total size fits. The crate
//! provides:
//!
//! - **Genetic Algorithm (GA)**: generational search over bit-string
//!   candidates with elitist truncation selection, single-point crossover
//!   and per-locus bit-flip mutation.
//! - **Simulated Annealing (SA)**: a single-bit-flip random walk with
//!   Metropolis acceptance and a choice of cooling schedules.
//! - **Exact baseline**: exhaustive search for small instances, used to
//!   judge how close the heuristics get.
//! - **Run driver**: repeated seeded trials of either heuristic with
//!   per-trial best and last solutions.
//!
//! # Architecture
//!
//! [`Instance`] is immutable once validated and is shared by reference.
//! Every candidate is a fixed-length [`Candidate`] scored by
//! [`Instance::evaluate`]; infeasible candidates score zero. All randomness
//! flows from an explicit generator, so a run is reproducible from its seed.
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{GaConfig, GaRunner};
//! use u_knapsack::{exact, Instance};
//!
//! let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
//! let config = GaConfig::default().with_seed(7);
//! let result = GaRunner::run(&instance, &config).unwrap();
//! assert!(result.best_evaluation.value <= exact::optimal_value(&instance));
//! ```

pub mod candidate;
pub mod driver;
pub mod error;
pub mod eval;
pub mod exact;
pub mod ga;
pub mod instance;
pub mod random;
pub mod sa;

pub use candidate::Candidate;
pub use error::KnapsackError;
pub use eval::{Evaluation, Scored};
pub use instance::Instance;

//! Genetic Algorithm for the 0/1 knapsack.
//!
//! A generational GA over binary inclusion vectors with truncation (elite)
//! selection, single-point or uniform crossover, and bit-flip mutation. Every
//! generation is replaced wholesale; the best candidate ever observed is
//! tracked separately so the reported best never regresses.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elites, mutation, presets)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best and last candidates plus history
//! - [`GenerationStats`]: Optional per-generation diagnostics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point and uniform crossover, bit-flip mutation
//! - [`selection`]: Stable descending ranking and elite truncation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{CrossoverKind, GaConfig, MutationDecay, OddElitePolicy, RefillPolicy};
pub use runner::{GaResult, GaRunner};
pub use types::{diversity, GenerationStats};

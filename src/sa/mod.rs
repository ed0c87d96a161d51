//! Simulated Annealing (SA) for the 0/1 knapsack.
//!
//! A single-solution random walk over Hamming-distance-1 moves. Worsening
//! moves are accepted with a probability that shrinks with temperature,
//! letting the search leave local optima early and freeze late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod cooling;
mod runner;
mod types;

pub use config::SaConfig;
pub use cooling::CoolingSchedule;
pub use runner::{SaResult, SaRunner};
pub use types::IterationRecord;

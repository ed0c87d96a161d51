//! Per-iteration diagnostics for simulated annealing.

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// State of the walk after one iteration.
///
/// `best` is a copy taken at that iteration, not a view of the live search
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Iteration index, starting at 0.
    pub iteration: usize,

    /// Value of the current solution after the accept/reject step.
    pub current_value: u64,

    /// Temperature used for the acceptance test.
    pub temperature: f64,

    /// Best candidate found up to and including this iteration.
    pub best: Candidate,
}

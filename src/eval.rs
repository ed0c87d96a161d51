//! Fitness and feasibility evaluation.
//!
//! The fitness landscape is deliberately discontinuous at the capacity
//! boundary: any candidate whose total size exceeds the capacity scores zero,
//! no matter how much value it carries.

use crate::candidate::Candidate;
use crate::error::KnapsackError;
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// Score of one candidate against one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Total value of included items, or 0 when infeasible.
    pub value: u64,

    /// Total size of included items (reported even when infeasible).
    pub size: u64,

    /// Whether `size <= capacity`.
    pub feasible: bool,
}

/// A candidate paired with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scored {
    pub candidate: Candidate,
    pub evaluation: Evaluation,
}

impl Scored {
    /// Evaluates `candidate` against `instance` and keeps both.
    pub fn new(instance: &Instance, candidate: Candidate) -> Self {
        let evaluation = instance.evaluate(&candidate);
        Self {
            candidate,
            evaluation,
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.evaluation.value
    }
}

impl Instance {
    /// Evaluates a candidate.
    ///
    /// O(n), pure. A size equal to the capacity is feasible.
    ///
    /// # Panics
    /// Panics if the candidate's length differs from the item count; use
    /// [`try_evaluate`](Self::try_evaluate) to check at a boundary.
    pub fn evaluate(&self, candidate: &Candidate) -> Evaluation {
        assert_eq!(
            candidate.len(),
            self.len(),
            "candidate length must match instance item count"
        );

        let (value, size) = candidate
            .included()
            .fold((0u64, 0u64), |(value, size), i| {
                (value + self.values()[i], size + self.sizes()[i])
            });
        let feasible = size <= self.capacity();

        Evaluation {
            value: if feasible { value } else { 0 },
            size,
            feasible,
        }
    }

    /// Like [`evaluate`](Self::evaluate) but reports a length mismatch as an error.
    pub fn try_evaluate(&self, candidate: &Candidate) -> Result<Evaluation, KnapsackError> {
        if candidate.len() != self.len() {
            return Err(KnapsackError::InvalidCandidate {
                expected: self.len(),
                actual: candidate.len(),
            });
        }
        Ok(self.evaluate(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classic() -> Instance {
        Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap()
    }

    #[test]
    fn test_empty_selection() {
        let e = classic().evaluate(&Candidate::zeros(3));
        assert_eq!(
            e,
            Evaluation {
                value: 0,
                size: 0,
                feasible: true
            }
        );
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let e = classic().evaluate(&Candidate::from_bits(vec![false, true, true]));
        assert!(e.feasible);
        assert_eq!(e.size, 50);
        assert_eq!(e.value, 220);
    }

    #[test]
    fn test_over_capacity_scores_zero() {
        let e = classic().evaluate(&Candidate::from_bits(vec![true, true, true]));
        assert!(!e.feasible);
        assert_eq!(e.size, 60);
        assert_eq!(e.value, 0);
    }

    #[test]
    fn test_try_evaluate_length_mismatch() {
        let err = classic()
            .try_evaluate(&Candidate::zeros(2))
            .unwrap_err();
        assert_eq!(
            err,
            KnapsackError::InvalidCandidate {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "candidate length must match instance item count")]
    fn test_evaluate_length_mismatch_panics() {
        classic().evaluate(&Candidate::zeros(4));
    }

    fn instance_and_candidate() -> impl Strategy<Value = (Instance, Candidate)> {
        (1usize..40).prop_flat_map(|n| {
            (
                prop::collection::vec(1u64..100, n),
                prop::collection::vec(1u64..50, n),
                0u64..1000,
                prop::collection::vec(any::<bool>(), n),
            )
                .prop_map(|(values, sizes, capacity, bits)| {
                    (
                        Instance::new(values, sizes, capacity).unwrap(),
                        Candidate::from_bits(bits),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn prop_evaluate_deterministic((inst, cand) in instance_and_candidate()) {
            prop_assert_eq!(inst.evaluate(&cand), inst.evaluate(&cand));
        }

        #[test]
        fn prop_infeasible_is_valueless((inst, cand) in instance_and_candidate()) {
            let e = inst.evaluate(&cand);
            let size: u64 = cand.included().map(|i| inst.sizes()[i]).sum();
            prop_assert_eq!(e.size, size);
            prop_assert_eq!(e.feasible, size <= inst.capacity());
            if size > inst.capacity() {
                prop_assert_eq!(e.value, 0);
            } else {
                let value: u64 = cand.included().map(|i| inst.values()[i]).sum();
                prop_assert_eq!(e.value, value);
            }
        }
    }
}

//! Exhaustive baseline.
//!
//! Memoless include/exclude recursion over the items. Exponential in the
//! item count; only meant to validate heuristic quality on small instances
//! and never called from the search loops.

use crate::candidate::Candidate;
use crate::instance::Instance;

/// Returns the optimal total value of `instance`.
///
/// # Examples
///
/// ```
/// use u_knapsack::{exact, Instance};
///
/// let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// assert_eq!(exact::optimal_value(&instance), 220);
/// ```
pub fn optimal_value(instance: &Instance) -> u64 {
    best_value(instance.values(), instance.sizes(), instance.capacity(), instance.len())
}

/// Value of the best subset of the first `n` items within `capacity`.
fn best_value(values: &[u64], sizes: &[u64], capacity: u64, n: usize) -> u64 {
    if n == 0 || capacity == 0 {
        return 0;
    }
    let i = n - 1;
    let exclude = best_value(values, sizes, capacity, i);
    if sizes[i] > capacity {
        return exclude;
    }
    let include = values[i] + best_value(values, sizes, capacity - sizes[i], i);
    include.max(exclude)
}

/// Returns an optimal candidate by walking every subset.
///
/// Ties resolve to the first optimum in enumeration order (item 0 varies
/// fastest), so the result is stable for a given instance.
///
/// # Panics
/// Panics for instances with more than 30 items.
pub fn optimal_candidate(instance: &Instance) -> Candidate {
    let n = instance.len();
    assert!(n <= 30, "exhaustive enumeration is limited to 30 items, got {n}");

    let mut best = Candidate::zeros(n);
    let mut best_value = 0;
    for mask in 0u64..(1u64 << n) {
        let candidate = Candidate::from_bits((0..n).map(|i| mask & (1 << i) != 0).collect());
        let value = instance.evaluate(&candidate).value;
        if value > best_value {
            best_value = value;
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classic_instance() {
        let inst = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
        assert_eq!(optimal_value(&inst), 220);
        let best = optimal_candidate(&inst);
        assert_eq!(best.to_string(), "011");
    }

    #[test]
    fn test_zero_capacity() {
        let inst = Instance::new(vec![5, 6], vec![1, 1], 0).unwrap();
        assert_eq!(optimal_value(&inst), 0);
    }

    #[test]
    fn test_everything_fits() {
        let inst = Instance::new(vec![5, 6, 7], vec![1, 1, 1], 10).unwrap();
        assert_eq!(optimal_value(&inst), 18);
    }

    #[test]
    fn test_ten_item_instance() {
        let inst = Instance::new(
            vec![95, 75, 60, 85, 40, 120, 30, 65, 50, 90],
            vec![50, 40, 30, 55, 25, 60, 35, 45, 40, 50],
            300,
        )
        .unwrap();
        let value = optimal_value(&inst);
        assert_eq!(inst.evaluate(&optimal_candidate(&inst)).value, value);
    }

    proptest! {
        #[test]
        fn prop_recursion_matches_enumeration(
            items in prop::collection::vec((1u64..60, 1u64..30), 1..12),
            capacity in 0u64..150,
        ) {
            let (values, sizes): (Vec<u64>, Vec<u64>) = items.into_iter().unzip();
            let inst = Instance::new(values, sizes, capacity).unwrap();
            let best = optimal_candidate(&inst);
            prop_assert_eq!(optimal_value(&inst), inst.evaluate(&best).value);
        }
    }
}

//! Problem instances.
//!
//! An [`Instance`] is the read-only input shared by every evaluation within
//! a run. It can only be built through validating constructors, so the rest
//! of the crate may assume `values.len() == sizes.len() > 0`, that every
//! value and size is positive, and that the totals and the capacity fit in
//! `i64`.

use crate::error::KnapsackError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 0/1 knapsack instance: item values, item sizes, and a capacity.
///
/// # Examples
///
/// ```
/// use u_knapsack::Instance;
///
/// let instance = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.capacity(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    values: Vec<u64>,
    sizes: Vec<u64>,
    capacity: u64,
}

/// Unvalidated wire shape; deserialization goes through [`Instance::from_signed`].
#[derive(Deserialize)]
struct RawInstance {
    values: Vec<i64>,
    sizes: Vec<i64>,
    capacity: i64,
}

impl TryFrom<RawInstance> for Instance {
    type Error = KnapsackError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::from_signed(&raw.values, &raw.sizes, raw.capacity)
    }
}

impl Instance {
    /// Builds an instance, checking lengths and positivity.
    pub fn new(values: Vec<u64>, sizes: Vec<u64>, capacity: u64) -> Result<Self, KnapsackError> {
        if values.len() != sizes.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                sizes: sizes.len(),
            });
        }
        if values.is_empty() {
            return Err(KnapsackError::Empty);
        }
        if let Some(index) = values.iter().position(|&v| v == 0) {
            return Err(KnapsackError::NonPositiveValue { index, value: 0 });
        }
        if let Some(index) = sizes.iter().position(|&s| s == 0) {
            return Err(KnapsackError::NonPositiveSize { index, size: 0 });
        }
        if !sum_fits_i64(&values) {
            return Err(KnapsackError::Overflow { field: "values" });
        }
        if !sum_fits_i64(&sizes) {
            return Err(KnapsackError::Overflow { field: "sizes" });
        }
        if capacity > i64::MAX as u64 {
            return Err(KnapsackError::Overflow { field: "capacity" });
        }
        Ok(Self {
            values,
            sizes,
            capacity,
        })
    }

    /// Builds an instance from signed data, as produced by external loaders.
    ///
    /// Reports negative capacities and non-positive entries instead of
    /// letting them wrap.
    pub fn from_signed(values: &[i64], sizes: &[i64], capacity: i64) -> Result<Self, KnapsackError> {
        if values.len() != sizes.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                sizes: sizes.len(),
            });
        }
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity(capacity));
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|&(_, &v)| v <= 0) {
            return Err(KnapsackError::NonPositiveValue { index, value });
        }
        if let Some((index, &size)) = sizes.iter().enumerate().find(|&(_, &s)| s <= 0) {
            return Err(KnapsackError::NonPositiveSize { index, size });
        }
        Self::new(
            values.iter().map(|&v| v as u64).collect(),
            sizes.iter().map(|&s| s as u64).collect(),
            capacity as u64,
        )
    }

    /// Generates a random instance with `n` items.
    ///
    /// Values are uniform in `[1, 100]`, sizes uniform in `[1, 50]`, and the
    /// capacity is half of the total size (rounded down), which keeps roughly
    /// half of the items packable.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Result<Self, KnapsackError> {
        let values: Vec<u64> = (0..n).map(|_| rng.random_range(1..=100)).collect();
        let sizes: Vec<u64> = (0..n).map(|_| rng.random_range(1..=50)).collect();
        let capacity = sizes.iter().sum::<u64>() / 2;
        Self::new(values, sizes, capacity)
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; validated instances have at least one item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Item values, indexed like candidate bits.
    #[inline]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Item sizes, indexed like candidate bits.
    #[inline]
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Knapsack capacity.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of all item values; an upper bound on any candidate's value.
    pub fn total_value(&self) -> u64 {
        self.values.iter().sum()
    }

    /// Sum of all item sizes.
    pub fn total_size(&self) -> u64 {
        self.sizes.iter().sum()
    }
}

/// Whether `items` sum to at most `i64::MAX`.
fn sum_fits_i64(items: &[u64]) -> bool {
    items
        .iter()
        .try_fold(0u64, |total, &x| total.checked_add(x))
        .is_some_and(|total| total <= i64::MAX as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_ok() {
        let inst = Instance::new(vec![60, 100, 120], vec![10, 20, 30], 50).unwrap();
        assert_eq!(inst.len(), 3);
        assert!(!inst.is_empty());
        assert_eq!(inst.total_value(), 280);
        assert_eq!(inst.total_size(), 60);
    }

    #[test]
    fn test_zero_capacity_allowed() {
        assert!(Instance::new(vec![1], vec![1], 0).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let err = Instance::new(vec![1, 2], vec![1], 5).unwrap_err();
        assert_eq!(err, KnapsackError::LengthMismatch { values: 2, sizes: 1 });
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            Instance::new(vec![], vec![], 5).unwrap_err(),
            KnapsackError::Empty
        );
    }

    #[test]
    fn test_zero_entries_rejected() {
        assert_eq!(
            Instance::new(vec![1, 0], vec![1, 1], 5).unwrap_err(),
            KnapsackError::NonPositiveValue { index: 1, value: 0 }
        );
        assert_eq!(
            Instance::new(vec![1, 1], vec![0, 1], 5).unwrap_err(),
            KnapsackError::NonPositiveSize { index: 0, size: 0 }
        );
    }

    #[test]
    fn test_from_signed_rejects_negatives() {
        assert_eq!(
            Instance::from_signed(&[1, 2], &[1, 2], -3).unwrap_err(),
            KnapsackError::NegativeCapacity(-3)
        );
        assert_eq!(
            Instance::from_signed(&[1, -2], &[1, 2], 3).unwrap_err(),
            KnapsackError::NonPositiveValue {
                index: 1,
                value: -2
            }
        );
        assert_eq!(
            Instance::from_signed(&[1, 2], &[1, -7], 3).unwrap_err(),
            KnapsackError::NonPositiveSize { index: 1, size: -7 }
        );
    }

    #[test]
    fn test_totals_beyond_i64_rejected() {
        assert_eq!(
            Instance::new(vec![u64::MAX - 1, 5], vec![1, 1], 5).unwrap_err(),
            KnapsackError::Overflow { field: "values" }
        );
        assert_eq!(
            Instance::new(vec![i64::MAX as u64, 1], vec![1, 1], 5).unwrap_err(),
            KnapsackError::Overflow { field: "values" }
        );
        assert_eq!(
            Instance::new(vec![1, 1], vec![1 << 62, 1 << 62], 5).unwrap_err(),
            KnapsackError::Overflow { field: "sizes" }
        );
        assert_eq!(
            Instance::new(vec![1], vec![1], i64::MAX as u64 + 1).unwrap_err(),
            KnapsackError::Overflow { field: "capacity" }
        );
        assert_eq!(
            Instance::from_signed(&[i64::MAX, 1], &[1, 1], 2).unwrap_err(),
            KnapsackError::Overflow { field: "values" }
        );
    }

    #[test]
    fn test_totals_at_i64_max_accepted() {
        let inst = Instance::new(
            vec![i64::MAX as u64 - 1, 1],
            vec![1, 1],
            i64::MAX as u64,
        )
        .unwrap();
        assert_eq!(inst.total_value(), i64::MAX as u64);
        let e = inst.evaluate(&vec![true, true].into());
        assert_eq!(e.value, i64::MAX as u64);
        assert!(e.feasible);

        let json = serde_json::to_string(&inst).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inst);
    }

    #[test]
    fn test_generate_ranges() {
        let mut rng = create_rng(42);
        let inst = Instance::generate(200, &mut rng).unwrap();
        assert_eq!(inst.len(), 200);
        assert!(inst.values().iter().all(|&v| (1..=100).contains(&v)));
        assert!(inst.sizes().iter().all(|&s| (1..=50).contains(&s)));
        assert_eq!(inst.capacity(), inst.total_size() / 2);
    }

    #[test]
    fn test_generate_zero_items() {
        let mut rng = create_rng(1);
        assert_eq!(
            Instance::generate(0, &mut rng).unwrap_err(),
            KnapsackError::Empty
        );
    }

    #[test]
    fn test_json_round_trip() {
        let inst = Instance::new(vec![95, 75, 60], vec![50, 40, 30], 80).unwrap();
        let json = serde_json::to_string(&inst).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inst);
        assert_eq!(back.values(), &[95, 75, 60]);
        assert_eq!(back.sizes(), &[50, 40, 30]);
        assert_eq!(back.capacity(), 80);
    }

    #[test]
    fn test_json_rejects_invalid() {
        let json = r#"{"values":[1,2],"sizes":[1],"capacity":3}"#;
        assert!(serde_json::from_str::<Instance>(json).is_err());

        let json = r#"{"values":[1],"sizes":[1],"capacity":-1}"#;
        assert!(serde_json::from_str::<Instance>(json).is_err());
    }
}

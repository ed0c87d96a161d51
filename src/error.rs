//! Error taxonomy.
//!
//! Every failure the crate reports happens at the boundary: building an
//! [`Instance`](crate::Instance), checking a candidate against it, or
//! validating a runner configuration. The search loops themselves are total.

use std::fmt;

/// Errors raised before a search begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    /// `values` and `sizes` have different lengths.
    LengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of sizes supplied.
        sizes: usize,
    },

    /// The instance has no items.
    Empty,

    /// Capacity is below zero.
    NegativeCapacity(i64),

    /// An item value is zero or negative.
    NonPositiveValue {
        /// Item index.
        index: usize,
        /// Offending value.
        value: i64,
    },

    /// An item size is zero or negative.
    NonPositiveSize {
        /// Item index.
        index: usize,
        /// Offending size.
        size: i64,
    },

    /// Total value, total size or capacity does not fit in `i64`.
    Overflow {
        /// `"values"`, `"sizes"` or `"capacity"`.
        field: &'static str,
    },

    /// A candidate's length does not match the instance's item count.
    InvalidCandidate {
        /// Item count of the instance.
        expected: usize,
        /// Length of the candidate.
        actual: usize,
    },

    /// A runner or driver configuration failed validation.
    InvalidConfig(String),
}

impl KnapsackError {
    /// Returns `true` for errors describing a malformed instance.
    pub fn is_invalid_instance(&self) -> bool {
        matches!(
            self,
            KnapsackError::LengthMismatch { .. }
                | KnapsackError::Empty
                | KnapsackError::NegativeCapacity(_)
                | KnapsackError::NonPositiveValue { .. }
                | KnapsackError::NonPositiveSize { .. }
                | KnapsackError::Overflow { .. }
        )
    }
}

impl fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnapsackError::LengthMismatch { values, sizes } => write!(
                f,
                "invalid instance: {values} values but {sizes} sizes"
            ),
            KnapsackError::Empty => write!(f, "invalid instance: no items"),
            KnapsackError::NegativeCapacity(capacity) => {
                write!(f, "invalid instance: negative capacity {capacity}")
            }
            KnapsackError::NonPositiveValue { index, value } => write!(
                f,
                "invalid instance: item {index} has non-positive value {value}"
            ),
            KnapsackError::NonPositiveSize { index, size } => write!(
                f,
                "invalid instance: item {index} has non-positive size {size}"
            ),
            KnapsackError::Overflow { field } => {
                write!(f, "invalid instance: {field} exceed the i64 range")
            }
            KnapsackError::InvalidCandidate { expected, actual } => write!(
                f,
                "invalid candidate: expected {expected} bits, got {actual}"
            ),
            KnapsackError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for KnapsackError {}

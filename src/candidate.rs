//! Candidate solutions.
//!
//! A [`Candidate`] is a fixed-length inclusion vector: bit `i` set means
//! item `i` goes into the knapsack. Candidates are plain values; engines
//! clone them whenever they need a snapshot.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary inclusion vector over all items of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    bits: Vec<bool>,
}

impl Candidate {
    /// Creates the empty selection of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// Creates a candidate whose bits are independently uniform in {0, 1}.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..n).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns whether item `i` is included.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Toggles item `i`.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        self.bits[i] = !self.bits[i];
    }

    /// Returns a copy with item `i` toggled (a Hamming-distance-1 neighbor).
    pub fn flipped(&self, i: usize) -> Self {
        let mut next = self.clone();
        next.flip(i);
        next
    }

    /// Indices of the included items, ascending.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    pub fn count_included(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        assert_eq!(self.len(), other.len(), "candidates must have equal length");
        self.bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<Vec<bool>> for Candidate {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bits(bits)
    }
}

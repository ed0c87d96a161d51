//! Binary genetic operators.
//!
//! Crossover and mutation over [`Candidate`] bit vectors. These are the
//! building blocks of the generational loop in [`GaRunner`](super::GaRunner)
//! and can also be used on their own.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: exchange tails at a given cut
//! - [`random_crossover`]: single-point crossover with a uniform cut in `[1, n-1]`
//! - [`uniform_crossover`]: per-locus coin flip between the parents
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip each bit independently with a fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use crate::candidate::Candidate;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at `cut`.
///
/// Child A is `parent1[..cut] ++ parent2[cut..]`, child B is
/// `parent2[..cut] ++ parent1[cut..]`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or `cut > n`.
pub fn single_point_crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    cut: usize,
) -> (Candidate, Candidate) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut <= n, "cut {cut} out of range for length {n}");

    let (head1, tail1) = parent1.as_slice().split_at(cut);
    let (head2, tail2) = parent2.as_slice().split_at(cut);

    let child_a: Vec<bool> = head1.iter().chain(tail2).copied().collect();
    let child_b: Vec<bool> = head2.iter().chain(tail1).copied().collect();

    (Candidate::from_bits(child_a), Candidate::from_bits(child_b))
}

/// Single-point crossover with a cut drawn uniformly from `[1, n-1]`.
///
/// Candidates shorter than two bits have no interior cut; the children are
/// copies of the parents.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn random_crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> (Candidate, Candidate) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.random_range(1..n);
    single_point_crossover(parent1, parent2, cut)
}

/// Uniform crossover.
///
/// At every locus a fair coin decides which parent child A copies; child B
/// copies the other one, so the children are complementary.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> (Candidate, Candidate) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    let (child_a, child_b): (Vec<bool>, Vec<bool>) = parent1
        .as_slice()
        .iter()
        .zip(parent2.as_slice())
        .map(|(&g1, &g2)| if rng.random_bool(0.5) { (g1, g2) } else { (g2, g1) })
        .unzip();

    (Candidate::from_bits(child_a), Candidate::from_bits(child_b))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation: each bit flips independently with probability `rate`.
///
/// Returns the number of flipped bits. A rate of 0 never flips; a rate of 1
/// flips every bit.
///
/// # Complexity
/// O(n), one uniform draw per bit
pub fn bit_flip_mutation<R: Rng>(candidate: &mut Candidate, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in candidate.as_mut_slice() {
        if rng.random_range(0.0..1.0) < rate {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}

/// Returns a mutated copy of `candidate`.
pub fn mutated<R: Rng>(candidate: &Candidate, rate: f64, rng: &mut R) -> Candidate {
    let mut child = candidate.clone();
    bit_flip_mutation(&mut child, rate, rng);
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn bits(s: &str) -> Candidate {
        Candidate::from_bits(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn test_single_point_known_cut() {
        let (a, b) = single_point_crossover(&bits("111000"), &bits("010101"), 2);
        assert_eq!(a.to_string(), "110101");
        assert_eq!(b.to_string(), "011000");
    }

    #[test]
    fn test_cut_at_edges() {
        let p1 = bits("1100");
        let p2 = bits("0011");
        let (a, b) = single_point_crossover(&p1, &p2, 0);
        assert_eq!((a, b), (p2.clone(), p1.clone()));
        let (a, b) = single_point_crossover(&p1, &p2, 4);
        assert_eq!((a, b), (p1, p2));
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_length_mismatch_panics() {
        single_point_crossover(&bits("10"), &bits("101"), 1);
    }

    #[test]
    fn test_random_crossover_single_bit() {
        let mut rng = create_rng(42);
        let (a, b) = random_crossover(&bits("1"), &bits("0"), &mut rng);
        assert_eq!(a.to_string(), "1");
        assert_eq!(b.to_string(), "0");
    }

    #[test]
    fn test_random_crossover_cut_is_interior() {
        // With complementary parents, a cut at 0 or n would reproduce a parent.
        let p1 = bits("11111111");
        let p2 = bits("00000000");
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (a, _) = random_crossover(&p1, &p2, &mut rng);
            assert!(a.get(0), "cut must be at least 1");
            assert!(!a.get(7), "cut must be at most n-1");
        }
    }

    #[test]
    fn test_uniform_crossover_mixes_loci() {
        let p1 = bits(&"1".repeat(64));
        let p2 = bits(&"0".repeat(64));
        let mut rng = create_rng(42);
        let (a, b) = uniform_crossover(&p1, &p2, &mut rng);
        // 64 fair coins all landing the same way is out of reach
        assert!(a.count_included() > 0 && a.count_included() < 64);
        assert_eq!(a.count_included() + b.count_included(), 64);
        assert_eq!(a.hamming_distance(&b), 64);
    }

    #[test]
    fn test_uniform_crossover_identical_parents() {
        let p = bits("1011001");
        let mut rng = create_rng(1);
        let (a, b) = uniform_crossover(&p, &p, &mut rng);
        assert_eq!(a, p);
        assert_eq!(b, p);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_uniform_crossover_length_mismatch_panics() {
        let mut rng = create_rng(0);
        uniform_crossover(&bits("10"), &bits("1"), &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let original = bits("1011001110");
        let mut c = original.clone();
        assert_eq!(bit_flip_mutation(&mut c, 0.0, &mut rng), 0);
        assert_eq!(c, original);
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let mut rng = create_rng(42);
        let mut c = bits("1011001110");
        assert_eq!(bit_flip_mutation(&mut c, 1.0, &mut rng), 10);
        assert_eq!(c.to_string(), "0100110001");
    }

    #[test]
    fn test_mutated_leaves_source() {
        let mut rng = create_rng(3);
        let src = bits("0000");
        let child = mutated(&src, 1.0, &mut rng);
        assert_eq!(src.to_string(), "0000");
        assert_eq!(child.to_string(), "1111");
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_length_and_loci(
            pair in (2usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            )),
            seed in any::<u64>(),
        ) {
            let (b1, b2) = pair;
            let p1 = Candidate::from_bits(b1);
            let p2 = Candidate::from_bits(b2);
            let mut rng = create_rng(seed);
            let (a, b) = random_crossover(&p1, &p2, &mut rng);

            prop_assert_eq!(a.len(), p1.len());
            prop_assert_eq!(b.len(), p2.len());
            for i in 0..p1.len() {
                prop_assert!(a.get(i) == p1.get(i) || a.get(i) == p2.get(i));
                prop_assert!(b.get(i) == p1.get(i) || b.get(i) == p2.get(i));
                // the two children split the parents' alleles between them
                prop_assert_eq!(a.get(i) ^ b.get(i), p1.get(i) ^ p2.get(i));
            }
        }

        #[test]
        fn prop_uniform_crossover_takes_each_locus_from_a_parent(
            pair in (1usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            )),
            seed in any::<u64>(),
        ) {
            let (b1, b2) = pair;
            let p1 = Candidate::from_bits(b1);
            let p2 = Candidate::from_bits(b2);
            let mut rng = create_rng(seed);
            let (a, b) = uniform_crossover(&p1, &p2, &mut rng);

            prop_assert_eq!(a.len(), p1.len());
            for i in 0..p1.len() {
                let from_p1 = a.get(i) == p1.get(i) && b.get(i) == p2.get(i);
                let from_p2 = a.get(i) == p2.get(i) && b.get(i) == p1.get(i);
                prop_assert!(from_p1 || from_p2);
            }
        }
    }
}

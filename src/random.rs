//! Seeded random sources.
//!
//! Every operation that needs entropy takes an explicit `&mut R: Rng`.
//! Runners build their generator here from an optional seed, and the trial
//! driver derives one independent seed per run so that concurrent trials
//! never share a stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives the seed of trial `index` from a base seed.
///
/// Uses one SplitMix64 step over `base + index`, so neighbouring trials get
/// decorrelated streams while staying reproducible.
pub fn trial_seed(base: u64, index: usize) -> u64 {
    let mut z = base.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

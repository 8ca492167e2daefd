//! Stochastic helpers for the Monte Carlo cross-check.
//! Note: uses `bevy_prng::WyRand`; seeds are always injected by the caller so
//! a simulation replays bit-for-bit.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Seeded WyRand.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform index in `0..n` via the widening-multiply reduction.
#[inline]
pub fn uniform_index(rng: &mut WyRand, n: usize) -> usize {
    ((u128::from(rng.next_u64()) * n as u128) >> 64) as usize
}

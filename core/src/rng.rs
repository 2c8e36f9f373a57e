//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through a RandomSource handed to each
//! PlayerProjection when it is constructed.
//!
//! Seeded runs give every roster slot its own stream, derived from
//! (master_seed XOR slot_index). This means:
//!   - Adding a player to the end of a roster never changes the
//!     trajectories of the players before it.
//!   - Each player's stream is fully reproducible in isolation.

use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg64Mcg;

/// The two draws the growth model needs.
pub trait RandomSource {
    /// Draw from the uniform distribution over [low, high].
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw from a normal distribution with the given mean and stddev.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// A deterministic RNG stream for a single roster slot.
#[derive(Debug, Clone)]
pub struct PlayerRng {
    inner: Pcg64Mcg,
}

impl PlayerRng {
    /// Create a player RNG from the master seed and the player's
    /// position in the roster.
    pub fn new(master_seed: u64, slot: usize) -> Self {
        let derived_seed = master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self { inner: Pcg64Mcg::seed_from_u64(derived_seed) }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl RandomSource for PlayerRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.inner);
        mean + std_dev * z
    }
}

/// Hands out one independent stream per roster slot for a single run.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_player(&self, slot: usize) -> PlayerRng {
        PlayerRng::new(self.master_seed, slot)
    }
}

/// Always returns the centre of the requested distribution: the midpoint
/// of a uniform range, the mean of a normal. Running the model with this
/// source yields the noise-free expected trajectory.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSource;

impl RandomSource for MidpointSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }

    fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
        mean
    }
}

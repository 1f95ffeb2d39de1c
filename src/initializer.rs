//! Random initialization of network parameters.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::time::{SystemTime, UNIX_EPOCH};

/// Fills parameter containers with independent draws from `Uniform[0, 1)`.
///
/// The random source is owned by the `Initializer`, so two networks initialized from the same
/// seed receive the same parameters.
#[derive(Clone, Debug)]
pub struct Initializer {
    rng: StdRng,
}

impl Initializer {
    /// Returns a new `Initializer` seeded from the current wall-clock time.
    pub fn new() -> Self {
        // A clock set before the epoch still produces a usable (if fixed) seed
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        Self::from_seed(nanos as u64)
    }

    /// Returns a new `Initializer` with a deterministic random source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Overwrites every element of every container with a fresh `Uniform[0, 1)` draw.
    pub fn fill(&mut self, containers: &mut [&mut Array2<f64>]) {
        for m in containers.iter_mut() {
            for value in m.iter_mut() {
                *value = self.rng.gen::<f64>();
            }
        }
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new()
    }
}

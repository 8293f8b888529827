//! # Proof Duration Model
//!
//! An artificial timing function standing in for the cost of a real
//! attestation step. It is **not** a benchmark of any cryptography:
//! the formula just encodes "larger and higher-value transactions take
//! marginally longer to attest", plus uniform measurement noise.
//!
//! `duration = base_delay + k_size·size + k_value·value + U(−j, +j)`
//!
//! The model is pure modulo the explicit RNG the caller passes in, so
//! tests can pin the jitter stream with a seeded [`rand::rngs::StdRng`].

use rand::Rng;

use crate::config::DurationConfig;
use crate::transaction::Transaction;

/// Computes simulated proof durations from a base delay and transaction
/// attributes.
#[derive(Debug, Clone)]
pub struct DurationModel {
    config: DurationConfig,
}

impl DurationModel {
    /// Builds a model from configured scale constants and jitter bound.
    pub fn new(config: DurationConfig) -> Self {
        Self { config }
    }

    /// The configuration this model was built with.
    pub fn config(&self) -> &DurationConfig {
        &self.config
    }

    /// Returns the simulated duration in seconds for one attestation.
    ///
    /// Every invocation draws fresh jitter from `rng`; with jitter
    /// bound zero the result is fully deterministic. When
    /// `clamp_negative` is set (the default) the result never drops
    /// below zero, even if jitter outweighs a tiny base delay.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        base_delay_secs: f64,
        tx: &Transaction,
        rng: &mut R,
    ) -> f64 {
        let bound = self.config.jitter_bound_secs;
        let jitter = if bound > 0.0 {
            rng.gen_range(-bound..=bound)
        } else {
            0.0
        };
        let duration = base_delay_secs
            + self.config.k_size * tx.size as f64
            + self.config.k_value * tx.value
            + jitter;
        if self.config.clamp_negative {
            duration.max(0.0)
        } else {
            duration
        }
    }
}

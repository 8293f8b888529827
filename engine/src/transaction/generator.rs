//! # Synthetic Transaction Source
//!
//! Produces well-formed [`Transaction`] records by uniform sampling
//! inside the declared [`TransactionLimits`]. The generator owns its
//! randomness source explicitly — seed it for reproducible batches, or
//! construct it from OS entropy for throwaway runs. No ambient global
//! RNG state anywhere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{AssetType, Transaction, TransactionLimits};

/// The transaction source: stochastic, stateless across records.
///
/// Each call to [`TransactionGenerator::next_transaction`] draws the four
/// attributes independently. Downstream components may assume every
/// produced record passes [`Transaction::validate`] against the same
/// limits the generator was built with.
pub struct TransactionGenerator<R: Rng = StdRng> {
    limits: TransactionLimits,
    rng: R,
}

impl TransactionGenerator<StdRng> {
    /// Creates a generator with a deterministic, seeded RNG.
    ///
    /// Two generators built with the same limits and seed produce
    /// identical batches.
    pub fn seeded(limits: TransactionLimits, seed: u64) -> Self {
        Self {
            limits,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy(limits: TransactionLimits) -> Self {
        Self {
            limits,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> TransactionGenerator<R> {
    /// Creates a generator over a caller-supplied randomness source.
    pub fn with_rng(limits: TransactionLimits, rng: R) -> Self {
        Self { limits, rng }
    }

    /// The limits this generator declares for its output.
    pub fn limits(&self) -> &TransactionLimits {
        &self.limits
    }

    /// Draws one transaction.
    pub fn next_transaction(&mut self) -> Transaction {
        let size = self.rng.gen_range(self.limits.min_size..=self.limits.max_size);
        let value = self
            .rng
            .gen_range(self.limits.min_value..=self.limits.max_value);
        let participants = self
            .rng
            .gen_range(self.limits.min_participants..=self.limits.max_participants);
        let asset_type = AssetType::ALL[self.rng.gen_range(0..AssetType::ALL.len())];
        Transaction::new(size, value, participants, asset_type)
    }

    /// Draws a batch of `count` transactions.
    pub fn batch(&mut self, count: usize) -> Vec<Transaction> {
        (0..count).map(|_| self.next_transaction()).collect()
    }
}

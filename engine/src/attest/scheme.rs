//! # Proof Scheme Selector
//!
//! Dispatches on a transaction's risk tier to pick the matching proof
//! scheme and base delay, then runs the duration model. The dispatch
//! table is configuration, not code: tiers map to
//! [`SchemeBinding`](crate::config::SchemeBinding) rows loaded at
//! startup.
//!
//! A tier with no configured binding is a contract violation between
//! classifier and selector. It fails with
//! [`EngineError::InvalidTier`] and propagates — it is never silently
//! defaulted to some scheme.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SchemeBinding;
use crate::error::EngineError;
use crate::risk::RiskTier;
use crate::transaction::Transaction;

use super::duration::DurationModel;

/// The outcome of one simulated attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofResult {
    /// The synthetic scheme label that was "run".
    pub scheme: String,
    /// Simulated duration in seconds. Non-negative under the default
    /// clamping configuration.
    pub duration_secs: f64,
}

/// Tier → scheme dispatch table.
#[derive(Debug, Clone)]
pub struct SchemeTable {
    bindings: Vec<SchemeBinding>,
}

impl SchemeTable {
    /// Builds the table from configured bindings. Validation of
    /// monotonicity and duplicates happens in
    /// [`EngineConfig::validate`](crate::config::EngineConfig::validate).
    pub fn new(bindings: Vec<SchemeBinding>) -> Self {
        Self { bindings }
    }

    /// Looks up the binding for a tier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTier`] when the tier has no row in
    /// the table.
    pub fn binding(&self, tier: RiskTier) -> Result<&SchemeBinding, EngineError> {
        self.bindings
            .iter()
            .find(|b| b.tier == tier)
            .ok_or(EngineError::InvalidTier { tier })
    }

    /// Selects the proof scheme for `tier` and simulates its duration
    /// for `tx`.
    ///
    /// The transaction is read-only input to the duration model; the
    /// only state consumed is one jitter draw from `rng`.
    pub fn select_proof<R: Rng + ?Sized>(
        &self,
        tier: RiskTier,
        tx: &Transaction,
        model: &DurationModel,
        rng: &mut R,
    ) -> Result<ProofResult, EngineError> {
        let binding = self.binding(tier)?;
        let duration_secs = model.simulate(binding.base_delay_secs, tx, rng);
        Ok(ProofResult {
            scheme: binding.label.clone(),
            duration_secs,
        })
    }
}

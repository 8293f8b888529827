//! # Dataset Pipeline
//!
//! Orchestrates the batch flow: for each transaction, classify its risk
//! tier, select and simulate the matching proof scheme, and merge the
//! results into an enriched [`ClassifiedTransaction`] for the analysis
//! consumer.
//!
//! ## Error Policy
//!
//! Per-transaction failures are **skipped and logged**, not fatal: the
//! offending record is logged at WARN with its id and counted in
//! [`BatchOutcome::skipped`], and the batch continues. Callers that
//! prefer abort-on-error can check the skip count.
//!
//! ## Concurrency
//!
//! Transactions share no mutable state, so the batch is embarrassingly
//! parallel. [`Pipeline::run_concurrent`] fans records out across a
//! bounded set of tokio tasks; each transaction gets its own jitter RNG
//! derived from the batch seed and its index, so sequential and
//! concurrent runs over the same input and seed produce identical
//! records (in report mode), regardless of task completion order.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::attest::{DelayAdapter, DurationModel, SchemeTable};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::risk::{RiskTier, RuleSet};
use crate::transaction::Transaction;

// ---------------------------------------------------------------------------
// ClassifiedTransaction
// ---------------------------------------------------------------------------

/// A transaction enriched with its risk tier and simulated proof result.
///
/// This is the pipeline's output contract: the analysis consumer groups
/// on `risk_level`, `proof_scheme`, and `proof_duration` with no further
/// transformation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTransaction {
    /// The original transaction, verbatim. Serialized flattened so the
    /// output record carries the four attributes at the top level.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Assigned risk tier.
    pub risk_level: RiskTier,
    /// Label of the proof scheme that was simulated.
    pub proof_scheme: String,
    /// Simulated (or, in enforce mode, measured) proof duration in
    /// seconds.
    pub proof_duration: f64,
}

/// The result of running a batch through the pipeline.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Successfully classified records, in input order.
    pub records: Vec<ClassifiedTransaction>,
    /// Number of transactions skipped due to per-record failures.
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// The classify → select → simulate pipeline, built once from an
/// [`EngineConfig`] and shared immutably across the batch.
#[derive(Debug)]
pub struct Pipeline {
    rules: RuleSet,
    schemes: SchemeTable,
    model: DurationModel,
    delay: DelayAdapter,
}

impl Pipeline {
    /// Builds a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the configuration
    /// violates the orderings checked by
    /// [`EngineConfig::validate`].
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            rules: RuleSet::from_config(&config.thresholds, config.limits.clone()),
            schemes: SchemeTable::new(config.schemes.clone()),
            model: DurationModel::new(config.duration.clone()),
            delay: DelayAdapter::new(&config.delay),
        })
    }

    /// Processes one transaction end to end.
    pub async fn process_one(
        &self,
        tx: Transaction,
        rng: &mut StdRng,
    ) -> Result<ClassifiedTransaction, EngineError> {
        let risk_level = self.rules.classify(&tx)?;
        let proof = self.schemes.select_proof(risk_level, &tx, &self.model, rng)?;
        let proof_duration = self.delay.apply(tx.id, proof.duration_secs).await?;
        tracing::debug!(
            tx = %tx.id,
            tier = %risk_level,
            scheme = %proof.scheme,
            duration_secs = proof_duration,
            "transaction classified"
        );
        Ok(ClassifiedTransaction {
            transaction: tx,
            risk_level,
            proof_scheme: proof.scheme,
            proof_duration,
        })
    }

    /// Runs a batch sequentially: each transaction is classified and
    /// simulated strictly before the next begins.
    pub async fn run(&self, transactions: Vec<Transaction>, seed: u64) -> BatchOutcome {
        let total = transactions.len();
        let mut records = Vec::with_capacity(total);
        let mut skipped = 0usize;

        for (index, tx) in transactions.into_iter().enumerate() {
            let tx_id = tx.id;
            let mut rng = jitter_rng(seed, index);
            match self.process_one(tx, &mut rng).await {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(tx = %tx_id, error = %err, "skipping transaction");
                    skipped += 1;
                }
            }
        }

        tracing::info!(total, skipped, "batch complete");
        BatchOutcome { records, skipped }
    }

    /// Runs a batch across up to `workers` concurrent tasks.
    ///
    /// Results are restored to input order before returning, so the
    /// output is byte-for-byte the same as [`Pipeline::run`] for the
    /// same input and seed in report mode.
    pub async fn run_concurrent(
        self: &Arc<Self>,
        transactions: Vec<Transaction>,
        seed: u64,
        workers: usize,
    ) -> BatchOutcome {
        let total = transactions.len();
        let semaphore = Arc::new(Semaphore::new(workers.max(1)));
        let mut tasks: JoinSet<(usize, Result<ClassifiedTransaction, EngineError>)> =
            JoinSet::new();

        for (index, tx) in transactions.into_iter().enumerate() {
            let pipeline = Arc::clone(self);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");
                let mut rng = jitter_rng(seed, index);
                let result = pipeline.process_one(tx, &mut rng).await;
                (index, result)
            });
        }

        let mut indexed = Vec::with_capacity(total);
        let mut skipped = 0usize;
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.expect("pipeline task must not panic");
            match result {
                Ok(record) => indexed.push((index, record)),
                Err(err) => {
                    tracing::warn!(index, error = %err, "skipping transaction");
                    skipped += 1;
                }
            }
        }
        indexed.sort_by_key(|(index, _)| *index);

        tracing::info!(total, skipped, workers, "concurrent batch complete");
        BatchOutcome {
            records: indexed.into_iter().map(|(_, record)| record).collect(),
            skipped,
        }
    }
}

/// Derives the jitter RNG for one transaction from the batch seed and
/// the transaction's index. Splitmix64 finalizer, so adjacent indices
/// get decorrelated streams.
fn jitter_rng(seed: u64, index: usize) -> StdRng {
    let mut z = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Error types for the attestra engine.
//!
//! Every fallible engine operation returns an [`EngineError`]. This enum
//! is exhaustive over the failure modes of the classify → select →
//! simulate flow plus configuration loading.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while classifying transactions and simulating
/// proof generation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The transaction failed structural validation. The classifier never
    /// guesses a default tier for bad input.
    #[error("malformed transaction {id}: {reason}")]
    MalformedTransaction {
        /// Id of the offending transaction.
        id: Uuid,
        /// Human-readable description of what was out of domain.
        reason: String,
    },

    /// A risk tier reached the proof scheme selector with no configured
    /// scheme binding. This is a contract violation between classifier
    /// and selector configuration and must propagate, never default.
    #[error("no proof scheme configured for tier {tier}")]
    InvalidTier {
        /// The tier that had no binding in the scheme table.
        tier: crate::risk::RiskTier,
    },

    /// An enforced proof delay exceeded the per-transaction timeout guard.
    #[error("proof simulation for {id} exceeded timeout of {timeout_ms}ms")]
    ProofTimeout {
        /// Id of the transaction whose delay was cut short.
        id: Uuid,
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The engine configuration violates an internal ordering or bound.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a configuration file failed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

//! Core type definitions for attestra transactions.
//!
//! These types form the vocabulary of every record flowing through the
//! pipeline. A [`Transaction`] is immutable once generated: the
//! classifier and the duration model only ever see `&Transaction`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// The asset class a transaction moves.
///
/// The asset type participates in risk classification: only stablecoin
/// transfers are eligible for the low-risk tier, while the medium-risk
/// rule is asset-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Fiat-pegged token. The boring, well-behaved case.
    Stablecoin,
    /// Free-floating token with meaningful price risk.
    VolatileToken,
    /// Non-fungible token.
    #[serde(rename = "NFT")]
    Nft,
}

impl AssetType {
    /// All asset types, in declaration order. Handy for uniform sampling
    /// and exhaustive tests.
    pub const ALL: [AssetType; 3] = [AssetType::Stablecoin, AssetType::VolatileToken, AssetType::Nft];
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stablecoin => write!(f, "stablecoin"),
            Self::VolatileToken => write!(f, "volatile_token"),
            Self::Nft => write!(f, "NFT"),
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A synthetic financial transaction record.
///
/// `size` is a magnitude in implementation-defined "tokens", `value` is
/// in monetary units, `participants` counts the parties involved. All
/// four attributes feed the risk classifier; `size` and `value`
/// additionally scale the simulated proof duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id, assigned at generation time.
    pub id: Uuid,
    /// Transaction size in tokens.
    pub size: u64,
    /// Transaction value in monetary units.
    pub value: f64,
    /// Number of participants.
    pub participants: u32,
    /// Asset class being moved.
    pub asset_type: AssetType,
}

impl Transaction {
    /// Creates a transaction with a fresh random id.
    pub fn new(size: u64, value: f64, participants: u32, asset_type: AssetType) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
            value,
            participants,
            asset_type,
        }
    }

    /// Checks the record against the generator-declared attribute ranges.
    ///
    /// The classifier calls this before evaluating any rule: a malformed
    /// transaction fails with [`EngineError::MalformedTransaction`]
    /// rather than being guessed into a tier.
    pub fn validate(&self, limits: &TransactionLimits) -> Result<(), EngineError> {
        if !self.value.is_finite() {
            return Err(self.malformed(format!("value is not finite: {}", self.value)));
        }
        if self.size < limits.min_size || self.size > limits.max_size {
            return Err(self.malformed(format!(
                "size {} outside [{}, {}]",
                self.size, limits.min_size, limits.max_size
            )));
        }
        if self.value < limits.min_value || self.value > limits.max_value {
            return Err(self.malformed(format!(
                "value {} outside [{}, {}]",
                self.value, limits.min_value, limits.max_value
            )));
        }
        if self.participants < limits.min_participants
            || self.participants > limits.max_participants
        {
            return Err(self.malformed(format!(
                "participants {} outside [{}, {}]",
                self.participants, limits.min_participants, limits.max_participants
            )));
        }
        Ok(())
    }

    fn malformed(&self, reason: String) -> EngineError {
        EngineError::MalformedTransaction {
            id: self.id,
            reason,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tx {} (size={}, value={:.2}, participants={}, asset={})",
            self.id, self.size, self.value, self.participants, self.asset_type
        )
    }
}

// ---------------------------------------------------------------------------
// TransactionLimits
// ---------------------------------------------------------------------------

/// The attribute ranges the transaction source declares for its output.
///
/// The generator samples uniformly inside these bounds and the
/// classifier rejects anything outside them. Bounds are inclusive on
/// both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionLimits {
    /// Minimum transaction size in tokens.
    pub min_size: u64,
    /// Maximum transaction size in tokens.
    pub max_size: u64,
    /// Minimum transaction value.
    pub min_value: f64,
    /// Maximum transaction value.
    pub max_value: f64,
    /// Minimum participant count.
    pub min_participants: u32,
    /// Maximum participant count.
    pub max_participants: u32,
}

impl Default for TransactionLimits {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_size: 1_000,
            min_value: 10.0,
            max_value: 50_000.0,
            min_participants: 1,
            max_participants: 7,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! # Engine Configuration & Constants
//!
//! Every tunable in attestra lives here: classification thresholds,
//! per-tier base delays, duration-model scale constants, jitter bound,
//! and the delay mode. If you're hardcoding one of these somewhere
//! else, you're doing it wrong.
//!
//! The `Default` impls carry the reference values; a JSON file loaded
//! via [`EngineConfig::from_json_file`] overrides them wholesale.
//! [`EngineConfig::validate`] enforces the orderings the pipeline
//! depends on (nested thresholds, monotonically increasing base
//! delays) so a bad config fails at startup, not mid-batch.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::risk::RiskTier;
use crate::transaction::TransactionLimits;

// ---------------------------------------------------------------------------
// Reference Constants
// ---------------------------------------------------------------------------

/// Proof scheme label for low-risk transactions.
pub const LIGHTWEIGHT_PROOF_LABEL: &str = "lightweight_zkp_proof";

/// Proof scheme label for medium-risk transactions.
pub const STANDARD_PROOF_LABEL: &str = "standard_zkp_proof";

/// Proof scheme label for high-risk transactions.
pub const HEAVY_DUTY_PROOF_LABEL: &str = "heavy_duty_zkp_proof";

/// Base delay in seconds for the lightweight scheme.
pub const LIGHTWEIGHT_BASE_DELAY_SECS: f64 = 0.05;

/// Base delay in seconds for the standard scheme.
pub const STANDARD_BASE_DELAY_SECS: f64 = 0.10;

/// Base delay in seconds for the heavy-duty scheme. An order of
/// magnitude above the others: heavy attestation is meant to hurt.
pub const HEAVY_DUTY_BASE_DELAY_SECS: f64 = 0.80;

/// Seconds of simulated delay added per token of transaction size.
pub const DEFAULT_K_SIZE: f64 = 1e-5;

/// Seconds of simulated delay added per monetary unit of value.
pub const DEFAULT_K_VALUE: f64 = 1e-7;

/// Half-width of the symmetric uniform jitter interval, in seconds.
pub const DEFAULT_JITTER_BOUND_SECS: f64 = 0.01;

/// Per-transaction timeout guard around an enforced delay, in
/// milliseconds. Generous: the worst-case reference duration is well
/// under a second.
pub const DEFAULT_PROOF_TIMEOUT_MS: u64 = 5_000;

// ---------------------------------------------------------------------------
// RiskThresholds
// ---------------------------------------------------------------------------

/// The six classification thresholds: (S1, V1, P1) bound the low-risk
/// rule, (S2, V2, P2) bound the medium-risk rule.
///
/// The observed ordering S1 ≤ S2, V1 ≤ V2, P1 ≤ P2 is enforced by
/// [`EngineConfig::validate`], so the low-risk acceptance region nests
/// strictly inside medium for the stablecoin case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskThresholds {
    /// S1 — maximum size for the low-risk rule.
    pub low_max_size: u64,
    /// V1 — maximum value for the low-risk rule.
    pub low_max_value: f64,
    /// P1 — maximum participants for the low-risk rule.
    pub low_max_participants: u32,
    /// S2 — maximum size for the medium-risk rule.
    pub medium_max_size: u64,
    /// V2 — maximum value for the medium-risk rule.
    pub medium_max_value: f64,
    /// P2 — maximum participants for the medium-risk rule.
    pub medium_max_participants: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max_size: 100,
            low_max_value: 1_000.0,
            low_max_participants: 2,
            medium_max_size: 500,
            medium_max_value: 10_000.0,
            medium_max_participants: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// SchemeBinding
// ---------------------------------------------------------------------------

/// One row of the proof dispatch table: tier → (label, base delay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemeBinding {
    /// The tier this scheme serves.
    pub tier: RiskTier,
    /// Synthetic scheme label. Carries no cryptographic meaning.
    pub label: String,
    /// Base delay in seconds fed to the duration model.
    pub base_delay_secs: f64,
}

/// The reference dispatch table, in ascending tier order.
pub fn default_scheme_bindings() -> Vec<SchemeBinding> {
    vec![
        SchemeBinding {
            tier: RiskTier::Low,
            label: LIGHTWEIGHT_PROOF_LABEL.to_string(),
            base_delay_secs: LIGHTWEIGHT_BASE_DELAY_SECS,
        },
        SchemeBinding {
            tier: RiskTier::Medium,
            label: STANDARD_PROOF_LABEL.to_string(),
            base_delay_secs: STANDARD_BASE_DELAY_SECS,
        },
        SchemeBinding {
            tier: RiskTier::High,
            label: HEAVY_DUTY_PROOF_LABEL.to_string(),
            base_delay_secs: HEAVY_DUTY_BASE_DELAY_SECS,
        },
    ]
}

// ---------------------------------------------------------------------------
// DurationConfig
// ---------------------------------------------------------------------------

/// Parameters of the duration model:
/// `duration = base + k_size·size + k_value·value + U(±jitter_bound)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationConfig {
    /// Seconds added per token of size.
    pub k_size: f64,
    /// Seconds added per unit of value.
    pub k_value: f64,
    /// Half-width of the uniform jitter interval, in seconds. Zero
    /// disables jitter entirely.
    pub jitter_bound_secs: f64,
    /// Clamp post-jitter durations at zero. The reference leaves them
    /// unclamped; a negative cost is useless downstream, so clamping is
    /// the default. Set to `false` to reproduce reference behavior.
    pub clamp_negative: bool,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            k_size: DEFAULT_K_SIZE,
            k_value: DEFAULT_K_VALUE,
            jitter_bound_secs: DEFAULT_JITTER_BOUND_SECS,
            clamp_negative: true,
        }
    }
}

// ---------------------------------------------------------------------------
// DelayConfig
// ---------------------------------------------------------------------------

/// Whether the simulated duration is also paid in wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayMode {
    /// Return the computed duration immediately. The default: blocking
    /// a pipeline for cosmetic timing has no production value.
    Report,
    /// Actually sleep for the computed duration and report measured
    /// elapsed time, reproducing the reference demo behavior.
    Enforce,
}

/// Delay adapter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelayConfig {
    /// Report the computed value or enforce it as real delay.
    pub mode: DelayMode,
    /// Per-transaction timeout guard around an enforced delay. Ignored
    /// in report mode.
    pub timeout_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            mode: DelayMode::Report,
            timeout_ms: DEFAULT_PROOF_TIMEOUT_MS,
        }
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// The full configuration surface of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Generator-declared attribute ranges.
    pub limits: TransactionLimits,
    /// Classification thresholds.
    pub thresholds: RiskThresholds,
    /// Proof dispatch table. Defaults to the three reference schemes.
    #[serde(default = "default_scheme_bindings")]
    pub schemes: Vec<SchemeBinding>,
    /// Duration model parameters.
    pub duration: DurationConfig,
    /// Delay adapter settings.
    pub delay: DelayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: TransactionLimits::default(),
            thresholds: RiskThresholds::default(),
            schemes: default_scheme_bindings(),
            duration: DurationConfig::default(),
            delay: DelayConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file. Missing sections fall
    /// back to their defaults; unknown fields are rejected.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the orderings and bounds the pipeline depends on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), EngineError> {
        let t = &self.thresholds;
        if t.low_max_size > t.medium_max_size {
            return Err(invalid(format!(
                "low_max_size ({}) exceeds medium_max_size ({})",
                t.low_max_size, t.medium_max_size
            )));
        }
        if t.low_max_value > t.medium_max_value {
            return Err(invalid(format!(
                "low_max_value ({}) exceeds medium_max_value ({})",
                t.low_max_value, t.medium_max_value
            )));
        }
        if t.low_max_participants > t.medium_max_participants {
            return Err(invalid(format!(
                "low_max_participants ({}) exceeds medium_max_participants ({})",
                t.low_max_participants, t.medium_max_participants
            )));
        }

        if self.limits.min_size > self.limits.max_size
            || self.limits.min_value > self.limits.max_value
            || self.limits.min_participants > self.limits.max_participants
        {
            return Err(invalid("transaction limits are inverted".to_string()));
        }

        if self.schemes.is_empty() {
            return Err(invalid("scheme table is empty".to_string()));
        }
        for binding in &self.schemes {
            if !binding.base_delay_secs.is_finite() || binding.base_delay_secs < 0.0 {
                return Err(invalid(format!(
                    "scheme '{}' has invalid base delay {}",
                    binding.label, binding.base_delay_secs
                )));
            }
            if binding.label.is_empty() {
                return Err(invalid(format!("scheme for tier {} has empty label", binding.tier)));
            }
        }
        // Base delays must strictly increase along the tier order: the
        // whole point of tiers is that riskier costs more.
        let mut by_tier: Vec<&SchemeBinding> = self.schemes.iter().collect();
        by_tier.sort_by_key(|b| b.tier);
        for pair in by_tier.windows(2) {
            if pair[0].tier == pair[1].tier {
                return Err(invalid(format!(
                    "duplicate scheme binding for tier {}",
                    pair[0].tier
                )));
            }
            if pair[0].base_delay_secs >= pair[1].base_delay_secs {
                return Err(invalid(format!(
                    "base delay for {} ({}) must be below {} ({})",
                    pair[0].tier, pair[0].base_delay_secs, pair[1].tier, pair[1].base_delay_secs
                )));
            }
        }

        let d = &self.duration;
        if !d.jitter_bound_secs.is_finite() || d.jitter_bound_secs < 0.0 {
            return Err(invalid(format!(
                "jitter bound must be a non-negative finite number, got {}",
                d.jitter_bound_secs
            )));
        }
        if !d.k_size.is_finite() || !d.k_value.is_finite() {
            return Err(invalid("duration scale constants must be finite".to_string()));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> EngineError {
    EngineError::InvalidConfig(msg)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

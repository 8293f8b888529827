//! The risk tier vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk tier assigned to every transaction.
///
/// Tiers are totally ordered by ascending assumed attestation cost:
/// `Low < Medium < High`. Exactly one tier is assigned per transaction,
/// as a pure function of its four attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskTier {
    /// Small stablecoin transfers between few parties.
    #[serde(rename = "low-risk")]
    Low,
    /// Mid-sized transfers of any asset type.
    #[serde(rename = "medium-risk")]
    Medium,
    /// Everything that exceeds the medium thresholds.
    #[serde(rename = "high-risk")]
    High,
}

impl RiskTier {
    /// All tiers in ascending cost order.
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// The wire/display name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low-risk",
            Self::Medium => "medium-risk",
            Self::High => "high-risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_cost() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn tier_display_matches_wire_name() {
        for tier in RiskTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{tier}\""));
        }
    }

    #[test]
    fn tier_serde_round_trip() {
        for tier in RiskTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            let recovered: RiskTier = serde_json::from_str(&json).unwrap();
            assert_eq!(tier, recovered);
        }
    }
}

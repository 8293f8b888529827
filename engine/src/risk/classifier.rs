//! # Rule-Based Risk Classifier
//!
//! Maps a transaction's four attributes to exactly one [`RiskTier`] via
//! an ordered, first-match-wins rule list. The rules are data, not
//! control flow: thresholds can be tuned, added, or reordered through
//! configuration without touching this module.
//!
//! ## Policy Note
//!
//! The default rule set carries an asymmetry inherited from the
//! reference policy: the low-risk rule requires a stablecoin asset,
//! while the medium-risk rule is asset-agnostic. Whether that asymmetry
//! is intentional is a product decision; the classifier preserves it
//! as specified rather than guessing a fix.

use serde::{Deserialize, Serialize};

use crate::config::RiskThresholds;
use crate::error::EngineError;
use crate::transaction::{AssetType, Transaction, TransactionLimits};

use super::tier::RiskTier;

// ---------------------------------------------------------------------------
// RiskRule
// ---------------------------------------------------------------------------

/// One acceptance rule: a tier plus inclusive upper bounds on the three
/// numeric attributes and an optional asset-type filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    /// Tier assigned when this rule matches.
    pub tier: RiskTier,
    /// Maximum transaction size, inclusive.
    pub max_size: u64,
    /// Maximum transaction value, inclusive.
    pub max_value: f64,
    /// Maximum participant count, inclusive.
    pub max_participants: u32,
    /// When set, the rule only matches transactions of this asset type.
    pub asset: Option<AssetType>,
}

impl RiskRule {
    /// Returns `true` when every bound holds. Boundaries are inclusive:
    /// a transaction sitting exactly on a threshold belongs to the
    /// cheaper tier.
    fn matches(&self, tx: &Transaction) -> bool {
        tx.size <= self.max_size
            && tx.value <= self.max_value
            && tx.participants <= self.max_participants
            && self.asset.map_or(true, |a| tx.asset_type == a)
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// The ordered rule list plus the catch-all fallback tier.
///
/// Classification walks the rules in order and assigns the tier of the
/// first match; a transaction matching nothing lands on the fallback.
/// Together the list and fallback make classification total over
/// well-formed input.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RiskRule>,
    fallback: RiskTier,
    limits: TransactionLimits,
}

impl RuleSet {
    /// Builds the two-rule reference policy from configured thresholds:
    /// stablecoin-only low-risk, asset-agnostic medium-risk, high-risk
    /// fallback.
    pub fn from_config(thresholds: &RiskThresholds, limits: TransactionLimits) -> Self {
        let rules = vec![
            RiskRule {
                tier: RiskTier::Low,
                max_size: thresholds.low_max_size,
                max_value: thresholds.low_max_value,
                max_participants: thresholds.low_max_participants,
                asset: Some(AssetType::Stablecoin),
            },
            RiskRule {
                tier: RiskTier::Medium,
                max_size: thresholds.medium_max_size,
                max_value: thresholds.medium_max_value,
                max_participants: thresholds.medium_max_participants,
                asset: None,
            },
        ];
        Self {
            rules,
            fallback: RiskTier::High,
            limits,
        }
    }

    /// Builds a rule set from an explicit rule list. Callers are
    /// responsible for ordering rules from cheapest to most expensive.
    pub fn new(rules: Vec<RiskRule>, fallback: RiskTier, limits: TransactionLimits) -> Self {
        Self {
            rules,
            fallback,
            limits,
        }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[RiskRule] {
        &self.rules
    }

    /// Assigns a risk tier to a transaction.
    ///
    /// Pure and deterministic: repeated calls on the same transaction
    /// yield the same tier, and the input is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTransaction`] when the record
    /// fails validation against the generator-declared limits. A bad
    /// record is never guessed into a tier.
    pub fn classify(&self, tx: &Transaction) -> Result<RiskTier, EngineError> {
        tx.validate(&self.limits)?;
        let tier = self
            .rules
            .iter()
            .find(|rule| rule.matches(tx))
            .map(|rule| rule.tier)
            .unwrap_or(self.fallback);
        Ok(tier)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn default_rules() -> RuleSet {
        RuleSet::from_config(&RiskThresholds::default(), TransactionLimits::default())
    }

    fn tx(size: u64, value: f64, participants: u32, asset: AssetType) -> Transaction {
        Transaction::new(size, value, participants, asset)
    }

    #[test]
    fn small_stablecoin_transfer_is_low_risk() {
        let rules = default_rules();
        let t = tx(50, 500.0, 1, AssetType::Stablecoin);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::Low);
    }

    #[test]
    fn maxed_out_nft_transfer_is_high_risk() {
        let rules = default_rules();
        let t = tx(999, 49_999.0, 7, AssetType::Nft);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::High);
    }

    #[test]
    fn low_risk_boundary_is_inclusive() {
        // Exactly at (S1, V1, P1) with a stablecoin: the cheaper tier wins.
        let rules = default_rules();
        let t = tx(100, 1_000.0, 2, AssetType::Stablecoin);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::Low);
    }

    #[test]
    fn medium_risk_boundary_is_inclusive() {
        let rules = default_rules();
        let t = tx(500, 10_000.0, 5, AssetType::VolatileToken);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::Medium);
    }

    #[test]
    fn just_past_medium_boundary_is_high_risk() {
        let rules = default_rules();
        assert_eq!(
            rules.classify(&tx(501, 10_000.0, 5, AssetType::Nft)).unwrap(),
            RiskTier::High
        );
        assert_eq!(
            rules.classify(&tx(500, 10_000.5, 5, AssetType::Nft)).unwrap(),
            RiskTier::High
        );
        assert_eq!(
            rules.classify(&tx(500, 10_000.0, 6, AssetType::Nft)).unwrap(),
            RiskTier::High
        );
    }

    #[test]
    fn medium_rule_accepts_any_asset_type() {
        // The asymmetry under test: low-risk needs a stablecoin, medium
        // does not.
        let rules = default_rules();
        for asset in AssetType::ALL {
            let t = tx(300, 5_000.0, 3, asset);
            assert_eq!(rules.classify(&t).unwrap(), RiskTier::Medium);
        }
    }

    #[test]
    fn non_stablecoin_within_low_bounds_falls_to_medium() {
        let rules = default_rules();
        let t = tx(50, 500.0, 1, AssetType::VolatileToken);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::Medium);
    }

    #[test]
    fn classification_is_deterministic_and_non_mutating() {
        let rules = default_rules();
        let t = tx(321, 9_000.0, 4, AssetType::Nft);
        let before = t.clone();
        let first = rules.classify(&t).unwrap();
        for _ in 0..10 {
            assert_eq!(rules.classify(&t).unwrap(), first);
        }
        assert_eq!(t, before, "classification must not mutate its input");
    }

    #[test]
    fn every_well_formed_transaction_gets_exactly_one_tier() {
        use crate::transaction::TransactionGenerator;
        let rules = default_rules();
        let mut gen = TransactionGenerator::seeded(TransactionLimits::default(), 42);
        for t in gen.batch(1_000) {
            // Total coverage: no well-formed input is left unclassified.
            rules.classify(&t).expect("well-formed input must classify");
        }
    }

    #[test]
    fn malformed_transaction_is_rejected_not_guessed() {
        let rules = default_rules();
        let t = tx(0, 500.0, 1, AssetType::Stablecoin);
        let err = rules.classify(&t).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedTransaction { .. }
        ));
    }

    #[test]
    fn custom_rule_order_is_respected() {
        // First match wins, so a permissive leading rule shadows later ones.
        let limits = TransactionLimits::default();
        let rules = RuleSet::new(
            vec![RiskRule {
                tier: RiskTier::High,
                max_size: u64::MAX,
                max_value: f64::MAX,
                max_participants: u32::MAX,
                asset: None,
            }],
            RiskTier::Low,
            limits,
        );
        let t = tx(1, 10.0, 1, AssetType::Stablecoin);
        assert_eq!(rules.classify(&t).unwrap(), RiskTier::High);
    }
}

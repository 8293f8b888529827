//! # Risk Module
//!
//! Tier vocabulary and the threshold classifier.
//!
//! ```text
//! tier.rs       — RiskTier (ordered, Low < Medium < High)
//! classifier.rs — RiskRule + RuleSet (ordered first-match-wins evaluation)
//! ```

pub mod classifier;
pub mod tier;

pub use classifier::{RiskRule, RuleSet};
pub use tier::RiskTier;

// Copyright (c) 2026 Attestra Contributors. MIT License.
// See LICENSE for details.

//! # Attestra — Core Engine
//!
//! Attestra synthesizes a population of financial transactions, assigns
//! each a discrete risk tier via deterministic threshold rules, and
//! simulates a tier-dependent "proof generation" delay standing in for
//! a cryptographic attestation step whose cost scales with risk.
//!
//! To be clear about what this is not: there is no cryptography here.
//! No soundness, no verification, no binding between a "proof" and the
//! transaction it decorates. The proof labels are strings and the
//! durations come from a cost model, not a prover.
//!
//! ## Architecture
//!
//! The engine is split into modules that mirror the pipeline stages:
//!
//! - **transaction** — Record types and the synthetic source.
//! - **risk** — Tier vocabulary and the first-match-wins rule classifier.
//! - **attest** — Duration model, scheme dispatch, and the delay adapter.
//! - **pipeline** — Batch orchestration and the enriched output record.
//! - **config** — Every tunable constant, loadable from JSON.
//! - **error** — One typed error enum for the whole engine.
//!
//! ## Design Philosophy
//!
//! 1. Classification is a pure function of the record. No hidden state,
//!    no ambient randomness.
//! 2. Every random draw comes from an explicit, seedable source, so any
//!    run can be reproduced bit for bit.
//! 3. Thresholds, base delays, and scale constants are configuration,
//!    not literals.
//! 4. Bad input fails loudly. The classifier never guesses a tier and
//!    the selector never defaults a scheme.

pub mod attest;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod risk;
pub mod transaction;

pub use attest::{DelayAdapter, DurationModel, ProofResult, SchemeTable};
pub use config::EngineConfig;
pub use error::EngineError;
pub use pipeline::{BatchOutcome, ClassifiedTransaction, Pipeline};
pub use risk::{RiskRule, RiskTier, RuleSet};
pub use transaction::{AssetType, Transaction, TransactionGenerator, TransactionLimits};

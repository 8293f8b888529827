//! # Transaction Module
//!
//! The input side of the pipeline: record types and the synthetic
//! source that produces them.
//!
//! ```text
//! types.rs     — Transaction, AssetType, TransactionLimits, validation
//! generator.rs — TransactionGenerator (seedable uniform sampling)
//! ```
//!
//! Records are immutable once generated and flow strictly downstream:
//! Source → Classifier → Selector → output. Nothing past the generator
//! ever takes a `&mut Transaction`.

pub mod generator;
pub mod types;

pub use generator::TransactionGenerator;
pub use types::{AssetType, Transaction, TransactionLimits};

//! # Attestation Simulation Module
//!
//! Everything downstream of classification: pick a proof scheme for a
//! tier, compute how long its attestation "takes", and optionally pay
//! that cost in real wall-clock time.
//!
//! ```text
//! duration.rs — DurationModel (base + attribute-scaled terms + jitter)
//! scheme.rs   — SchemeTable dispatch (tier → label, base delay) → ProofResult
//! enforce.rs  — DelayAdapter (report the value vs. enforce it as real delay)
//! ```
//!
//! None of this is cryptography. The scheme labels are synthetic, the
//! durations are a cost *model*, and nothing here verifies anything.

pub mod duration;
pub mod enforce;
pub mod scheme;

pub use duration::DurationModel;
pub use enforce::DelayAdapter;
pub use scheme::{ProofResult, SchemeTable};

//! # Realistic-Delay Adapter
//!
//! The duration model returns a number; this adapter decides whether
//! that number is also paid in wall-clock time. Keeping the two apart
//! keeps the model pure and the test suite fast.
//!
//! In [`DelayMode::Report`] (the default) the computed duration comes
//! back immediately. In [`DelayMode::Enforce`] the adapter actually
//! sleeps for the computed duration — reproducing the reference demo,
//! where simulated cost and real cost are the same thing — and reports
//! the *measured* elapsed time, which tracks but does not exactly equal
//! the computed value because of scheduler overhead. Enforced sleeps
//! run under a per-transaction timeout guard so one pathological record
//! cannot stall a whole batch.

use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::config::{DelayConfig, DelayMode};
use crate::error::EngineError;

/// Applies the configured delay policy to a computed proof duration.
#[derive(Debug, Clone)]
pub struct DelayAdapter {
    mode: DelayMode,
    timeout: Duration,
}

impl DelayAdapter {
    /// Builds the adapter from delay configuration.
    pub fn new(config: &DelayConfig) -> Self {
        Self {
            mode: config.mode,
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// The configured mode.
    pub fn mode(&self) -> DelayMode {
        self.mode
    }

    /// Resolves the duration to report for one proof.
    ///
    /// * `Report` — returns `computed_secs` unchanged, instantly.
    /// * `Enforce` — sleeps for `computed_secs` (floored at zero; you
    ///   cannot sleep for negative time) and returns the measured
    ///   elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProofTimeout`] when an enforced delay
    /// outlives the configured timeout guard.
    pub async fn apply(&self, tx_id: Uuid, computed_secs: f64) -> Result<f64, EngineError> {
        match self.mode {
            DelayMode::Report => Ok(computed_secs),
            DelayMode::Enforce => {
                let sleep_for = Duration::from_secs_f64(computed_secs.max(0.0));
                let started = Instant::now();
                tokio::time::timeout(self.timeout, tokio::time::sleep(sleep_for))
                    .await
                    .map_err(|_| EngineError::ProofTimeout {
                        id: tx_id,
                        timeout_ms: self.timeout.as_millis() as u64,
                    })?;
                Ok(started.elapsed().as_secs_f64())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PROOF_TIMEOUT_MS;

    fn adapter(mode: DelayMode, timeout_ms: u64) -> DelayAdapter {
        DelayAdapter::new(&DelayConfig { mode, timeout_ms })
    }

    #[tokio::test]
    async fn report_mode_returns_the_computed_value() {
        let adapter = adapter(DelayMode::Report, DEFAULT_PROOF_TIMEOUT_MS);
        let got = adapter.apply(Uuid::new_v4(), 0.42).await.unwrap();
        assert_eq!(got, 0.42);
    }

    #[tokio::test]
    async fn report_mode_passes_negative_durations_through() {
        // Unclamped reference-style durations are the adapter's caller's
        // problem; report mode does not editorialize.
        let adapter = adapter(DelayMode::Report, DEFAULT_PROOF_TIMEOUT_MS);
        let got = adapter.apply(Uuid::new_v4(), -0.003).await.unwrap();
        assert_eq!(got, -0.003);
    }

    #[tokio::test(start_paused = true)]
    async fn enforce_mode_sleeps_and_measures() {
        let adapter = adapter(DelayMode::Enforce, DEFAULT_PROOF_TIMEOUT_MS);
        let got = adapter.apply(Uuid::new_v4(), 0.5).await.unwrap();
        // Paused tokio time auto-advances, so measured elapsed is the
        // sleep length with no real waiting.
        assert!((got - 0.5).abs() < 0.01, "measured {got}");
    }

    #[tokio::test(start_paused = true)]
    async fn enforce_mode_times_out_pathological_delays() {
        let adapter = adapter(DelayMode::Enforce, 100);
        let id = Uuid::new_v4();
        let err = adapter.apply(id, 60.0).await.unwrap_err();
        match err {
            EngineError::ProofTimeout { id: got, timeout_ms } => {
                assert_eq!(got, id);
                assert_eq!(timeout_ms, 100);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn enforce_mode_floors_negative_durations_at_zero() {
        let adapter = adapter(DelayMode::Enforce, DEFAULT_PROOF_TIMEOUT_MS);
        let got = adapter.apply(Uuid::new_v4(), -1.0).await.unwrap();
        assert!(got >= 0.0 && got < 0.01);
    }
}

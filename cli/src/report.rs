//! # Analysis Report
//!
//! The downstream consumer of the pipeline's output: aggregates
//! classified records into the three groupings the record contract was
//! designed for — tier frequencies, mean proof duration per scheme, and
//! total proof duration per tier — and renders them as an aligned table
//! or JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use attestra_engine::{BatchOutcome, RiskTier};

/// Frequency of one risk tier in the batch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TierCount {
    /// The tier.
    pub tier: RiskTier,
    /// Number of records assigned to it.
    pub count: usize,
}

/// Duration statistics for one proof scheme.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemeDuration {
    /// Scheme label.
    pub scheme: String,
    /// Number of records that ran this scheme.
    pub count: usize,
    /// Mean simulated duration in seconds.
    pub mean_duration_secs: f64,
}

/// Summed simulated duration for one risk tier.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TierDuration {
    /// The tier.
    pub tier: RiskTier,
    /// Total simulated duration across the tier's records, in seconds.
    pub total_duration_secs: f64,
}

/// Aggregate view of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Number of successfully classified records.
    pub total_records: usize,
    /// Number of transactions skipped by the pipeline.
    pub skipped: usize,
    /// Tier frequencies, ascending tier order. Empty tiers included.
    pub tier_counts: Vec<TierCount>,
    /// Per-scheme duration means, sorted by scheme label.
    pub scheme_durations: Vec<SchemeDuration>,
    /// Per-tier duration totals, ascending tier order.
    pub tier_durations: Vec<TierDuration>,
}

impl AnalysisReport {
    /// Aggregates a batch outcome into the report.
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        let mut tier_counts: BTreeMap<RiskTier, usize> = BTreeMap::new();
        let mut tier_totals: BTreeMap<RiskTier, f64> = BTreeMap::new();
        let mut scheme_stats: BTreeMap<&str, (usize, f64)> = BTreeMap::new();

        for record in &outcome.records {
            *tier_counts.entry(record.risk_level).or_default() += 1;
            *tier_totals.entry(record.risk_level).or_default() += record.proof_duration;
            let entry = scheme_stats.entry(record.proof_scheme.as_str()).or_default();
            entry.0 += 1;
            entry.1 += record.proof_duration;
        }

        Self {
            generated_at: Utc::now(),
            total_records: outcome.records.len(),
            skipped: outcome.skipped,
            tier_counts: RiskTier::ALL
                .iter()
                .map(|&tier| TierCount {
                    tier,
                    count: tier_counts.get(&tier).copied().unwrap_or(0),
                })
                .collect(),
            scheme_durations: scheme_stats
                .into_iter()
                .map(|(scheme, (count, sum))| SchemeDuration {
                    scheme: scheme.to_string(),
                    count,
                    mean_duration_secs: sum / count as f64,
                })
                .collect(),
            tier_durations: RiskTier::ALL
                .iter()
                .map(|&tier| TierDuration {
                    tier,
                    total_duration_secs: tier_totals.get(&tier).copied().unwrap_or(0.0),
                })
                .collect(),
        }
    }

    /// Renders the report as aligned human-readable tables.
    pub fn render_table(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Batch summary ({} records, {} skipped)\n\n",
            self.total_records, self.skipped
        ));

        out.push_str("Risk tier frequencies\n");
        for row in &self.tier_counts {
            out.push_str(&format!("  {:<12} : {:>6}\n", row.tier.to_string(), row.count));
        }

        out.push_str("\nMean proof duration by scheme\n");
        for row in &self.scheme_durations {
            out.push_str(&format!(
                "  {:<22} : {:>9.4} s  ({} records)\n",
                row.scheme, row.mean_duration_secs, row.count
            ));
        }

        out.push_str("\nTotal proof duration by tier\n");
        let mut grand_total = 0.0;
        for row in &self.tier_durations {
            grand_total += row.total_duration_secs;
            out.push_str(&format!(
                "  {:<12} : {:>9.4} s\n",
                row.tier.to_string(),
                row.total_duration_secs
            ));
        }
        out.push_str(&format!("  {:<12} : {:>9.4} s\n", "total", grand_total));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attestra_engine::{AssetType, ClassifiedTransaction, Transaction};

    fn record(tier: RiskTier, scheme: &str, duration: f64) -> ClassifiedTransaction {
        ClassifiedTransaction {
            transaction: Transaction::new(50, 500.0, 1, AssetType::Stablecoin),
            risk_level: tier,
            proof_scheme: scheme.to_string(),
            proof_duration: duration,
        }
    }

    fn outcome() -> BatchOutcome {
        BatchOutcome {
            records: vec![
                record(RiskTier::Low, "lightweight_zkp_proof", 0.05),
                record(RiskTier::Low, "lightweight_zkp_proof", 0.07),
                record(RiskTier::High, "heavy_duty_zkp_proof", 0.80),
            ],
            skipped: 1,
        }
    }

    #[test]
    fn tier_counts_cover_all_tiers() {
        let report = AnalysisReport::from_outcome(&outcome());
        assert_eq!(report.total_records, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.tier_counts,
            vec![
                TierCount { tier: RiskTier::Low, count: 2 },
                TierCount { tier: RiskTier::Medium, count: 0 },
                TierCount { tier: RiskTier::High, count: 1 },
            ]
        );
    }

    #[test]
    fn scheme_means_are_computed() {
        let report = AnalysisReport::from_outcome(&outcome());
        let light = report
            .scheme_durations
            .iter()
            .find(|s| s.scheme == "lightweight_zkp_proof")
            .unwrap();
        assert_eq!(light.count, 2);
        assert!((light.mean_duration_secs - 0.06).abs() < 1e-12);
    }

    #[test]
    fn tier_totals_sum_durations() {
        let report = AnalysisReport::from_outcome(&outcome());
        let low = &report.tier_durations[0];
        assert_eq!(low.tier, RiskTier::Low);
        assert!((low.total_duration_secs - 0.12).abs() < 1e-12);
        let medium = &report.tier_durations[1];
        assert_eq!(medium.total_duration_secs, 0.0);
    }

    #[test]
    fn table_rendering_mentions_every_grouping() {
        let table = AnalysisReport::from_outcome(&outcome()).render_table();
        assert!(table.contains("Risk tier frequencies"));
        assert!(table.contains("Mean proof duration by scheme"));
        assert!(table.contains("Total proof duration by tier"));
        assert!(table.contains("low-risk"));
        assert!(table.contains("heavy_duty_zkp_proof"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = AnalysisReport::from_outcome(&outcome());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_records"], 3);
        assert_eq!(value["tier_counts"][0]["tier"], "low-risk");
    }
}

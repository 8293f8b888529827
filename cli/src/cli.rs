//! # CLI Interface
//!
//! Defines the command-line argument structure for the `attestra`
//! binary using `clap` derive. Two subcommands: `run` and `version`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Attestra synthetic risk-classification pipeline.
///
/// Generates a batch of synthetic transactions, classifies each into a
/// risk tier, simulates a tier-dependent proof-generation delay, and
/// prints an aggregate analysis report.
#[derive(Parser, Debug)]
#[command(
    name = "attestra",
    about = "Risk classification and tiered proof-cost simulation",
    version,
    propagate_version = true
)]
pub struct AttestraCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the attestra binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate, classify, and report on a synthetic batch.
    Run(RunArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Number of transactions to generate.
    #[arg(long, short = 'n', env = "ATTESTRA_COUNT", default_value_t = 100)]
    pub count: usize,

    /// Seed for transaction generation and jitter.
    ///
    /// When omitted, a random seed is drawn and logged so the run can
    /// be reproduced afterwards.
    #[arg(long, env = "ATTESTRA_SEED")]
    pub seed: Option<u64>,

    /// Path to an engine configuration file (JSON).
    ///
    /// Missing sections fall back to the reference defaults.
    #[arg(long, short = 'c', env = "ATTESTRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of concurrent worker tasks. 0 runs the batch sequentially.
    #[arg(long, env = "ATTESTRA_WORKERS", default_value_t = 0)]
    pub workers: usize,

    /// Pay each simulated proof duration in real wall-clock time.
    ///
    /// Overrides the config file's delay mode. Sequential runs then
    /// take the sum of all per-transaction delays — that is the point.
    #[arg(long)]
    pub enforce_delay: bool,

    /// Output format for the analysis report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

/// How to render the analysis report on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned human-readable tables.
    Table,
    /// One JSON document with the aggregates.
    Json,
    /// Every classified record as a JSON line, no aggregation.
    Records,
}

/// Log format selector mirrored into [`crate::logging::LogFormat`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable, colored output.
    Pretty,
    /// Machine-parseable JSON lines.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        AttestraCli::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let cli = AttestraCli::parse_from(["attestra", "run"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.count, 100);
                assert_eq!(args.workers, 0);
                assert!(!args.enforce_delay);
                assert_eq!(args.format, OutputFormat::Table);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_flags_parse() {
        let cli = AttestraCli::parse_from([
            "attestra", "run", "-n", "500", "--seed", "42", "--workers", "8",
            "--enforce-delay", "--format", "json",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.count, 500);
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.workers, 8);
                assert!(args.enforce_delay);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

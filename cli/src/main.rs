// Copyright (c) 2026 Attestra Contributors. MIT License.
// See LICENSE for details.

//! # Attestra Batch Runner
//!
//! Entry point for the `attestra` binary. Parses CLI arguments,
//! initializes logging, loads the engine configuration, runs one
//! synthetic batch through the pipeline, and prints the analysis
//! report.
//!
//! The binary supports two subcommands:
//!
//! - `run`     — generate, classify, and report on a synthetic batch
//! - `version` — print build version information

mod cli;
mod logging;
mod report;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use attestra_engine::config::DelayMode;
use attestra_engine::{EngineConfig, Pipeline, TransactionGenerator};

use cli::{AttestraCli, Commands, LogFormatArg, OutputFormat, RunArgs};
use logging::LogFormat;
use report::AnalysisReport;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = AttestraCli::parse();

    match cli.command {
        Commands::Run(args) => run_batch(args).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Runs one batch end to end: configure, generate, classify, report.
async fn run_batch(args: RunArgs) -> Result<()> {
    let log_format = match args.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Json => LogFormat::Json,
    };
    logging::init_logging("attestra=info,attestra_engine=info", log_format);

    // --- Configuration ---
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.enforce_delay {
        config.delay.mode = DelayMode::Enforce;
    }

    // When no seed is given, draw one and log it so the run can be
    // replayed with --seed.
    let seed = args.seed.unwrap_or_else(rand::random);

    tracing::info!(
        count = args.count,
        seed,
        workers = args.workers,
        delay_mode = ?config.delay.mode,
        "starting batch"
    );

    // --- Pipeline ---
    let pipeline = Pipeline::new(&config).context("invalid engine configuration")?;

    // --- Source ---
    let mut generator = TransactionGenerator::seeded(config.limits.clone(), seed);
    let transactions = generator.batch(args.count);

    // --- Run ---
    let started = Instant::now();
    let outcome = if args.workers == 0 {
        pipeline.run(transactions, seed).await
    } else {
        Arc::new(pipeline)
            .run_concurrent(transactions, seed, args.workers)
            .await
    };
    tracing::info!(
        records = outcome.records.len(),
        skipped = outcome.skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch finished"
    );

    // --- Report ---
    match args.format {
        OutputFormat::Table => {
            print!("{}", AnalysisReport::from_outcome(&outcome).render_table());
        }
        OutputFormat::Json => {
            let report = AnalysisReport::from_outcome(&outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Records => {
            for record in &outcome.records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }

    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("attestra {}", env!("CARGO_PKG_VERSION"));
}

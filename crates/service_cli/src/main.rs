//! Monte Carlo π estimator CLI.
//!
//! Runs the estimation kernel once sequentially and once on a
//! fixed-size worker pool, derives the parallel-performance metrics
//! (speedup, efficiency, overhead), and renders the report.
//!
//! # Usage
//!
//! ```bash
//! pi-estimator                          # 1,000,000 samples, 4 workers
//! pi-estimator --samples 10000000 --workers 8
//! pi-estimator --seed 42 --format json  # reproducible, machine-readable
//! ```

use anyhow::Context;
use clap::Parser;
use estimator_kernel::engine::{
    run_parallel, run_sequential, RunConfig, DEFAULT_SAMPLES, DEFAULT_WORKERS,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod render;

pub use error::{CliError, Result};

use render::RunSummary;

/// Monte Carlo π estimator with parallel-performance metrics
#[derive(Parser)]
#[command(name = "pi-estimator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total number of points to sample
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Number of parallel workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Base seed for reproducible runs (omit for OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<String> {
    let mut builder = RunConfig::builder()
        .samples(cli.samples)
        .workers(cli.workers);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let config = builder
        .build()
        .map_err(estimator_kernel::EngineError::from)?;

    let available = num_cpus::get();
    if config.workers() > available {
        warn!(
            "worker count {} exceeds the {} logical CPUs available",
            config.workers(),
            available
        );
    }

    info!(
        "Running sequential estimation ({} samples)",
        config.samples()
    );
    let seq = run_sequential(&config)?;
    info!("Sequential done in {:.3} ms", seq.elapsed_ms());

    info!(
        "Running parallel estimation ({} samples, {} workers)",
        config.samples(),
        config.workers()
    );
    let par = run_parallel(&config)?;
    info!("Parallel done in {:.3} ms", par.elapsed_ms());

    let metrics = estimator_metrics::compute(&seq, &par, config.workers())?;

    let summary = RunSummary {
        workers: config.workers(),
        sequential: &seq,
        parallel: &par,
        metrics: &metrics,
    };
    render::render(&summary, &cli.format)
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let report = run(&cli).context("estimation run failed")?;
    println!("{}", report);
    Ok(())
}

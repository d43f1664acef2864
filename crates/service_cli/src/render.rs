//! Report rendering.
//!
//! Renders the run results and metrics report as human-readable text in
//! a fixed layout (π to 8 decimals, timings in milliseconds to 3
//! decimals, absolute error to 10 decimals) or as JSON.

use estimator_kernel::engine::RunResult;
use estimator_metrics::MetricsReport;
use serde::Serialize;

use crate::{CliError, Result};

/// Full run summary handed to the output format.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub workers: usize,
    pub sequential: &'a RunResult,
    pub parallel: &'a RunResult,
    pub metrics: &'a MetricsReport,
}

/// Renders the summary in the requested format.
///
/// Supported formats: `text`, `json`. Anything else is rejected as an
/// invalid argument.
pub fn render(summary: &RunSummary<'_>, format: &str) -> Result<String> {
    match format {
        "text" => Ok(render_text(summary)),
        "json" => Ok(serde_json::to_string_pretty(summary)?),
        other => Err(CliError::InvalidArgument(format!(
            "unknown format: {}. Supported: text, json",
            other
        ))),
    }
}

fn render_text(summary: &RunSummary<'_>) -> String {
    let seq = summary.sequential;
    let par = summary.parallel;
    let m = summary.metrics;

    let mut out = String::new();
    out.push_str("=== Sequential Summary ===\n");
    out.push_str(&format!("π ≈ {:.8}\n", m.pi_sequential));
    out.push_str(&format!("Time Ts: {:.3} ms\n", seq.elapsed_ms()));
    out.push('\n');
    out.push_str("=== Parallel Summary ===\n");
    out.push_str(&format!("π ≈ {:.8}\n", m.pi_parallel));
    out.push_str(&format!(
        "Time Tp ({} workers): {:.3} ms\n",
        summary.workers,
        par.elapsed_ms()
    ));
    out.push('\n');
    out.push_str("=== Metrics ===\n");
    out.push_str(&format!("Speedup (S=Ts/Tp): {:.3}\n", m.speedup));
    out.push_str(&format!("Efficiency (E=S/p): {:.3}\n", m.efficiency));
    out.push_str(&format!(
        "Overhead (To=p*Tp - Ts): {:.3} ms\n",
        m.overhead_ms()
    ));
    out.push('\n');
    out.push_str(&format!("Total points: {}\n", par.samples));
    out.push_str(&format!("Points inside circle: {}\n", par.hits));
    out.push_str(&format!("Absolute error: {:.10}\n", m.absolute_error));
    out
}

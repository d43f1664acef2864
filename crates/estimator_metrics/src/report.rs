//! Metrics report computation.

use estimator_kernel::engine::RunResult;

/// Error produced by the metrics calculator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// Parallel elapsed time measured as zero; speedup and efficiency
    /// are undefined, so no report is produced.
    #[error("parallel elapsed time is zero: speedup is undefined")]
    DegenerateTiming,

    /// Worker count must be positive.
    #[error("invalid worker count {0}: must be positive")]
    InvalidWorkerCount(usize),
}

/// Terminal, read-only report derived from the two run results.
///
/// Computed once per run pair and handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricsReport {
    /// π estimate from the sequential run.
    pub pi_sequential: f64,
    /// π estimate from the parallel run.
    pub pi_parallel: f64,
    /// Speedup `S = Ts / Tp`.
    pub speedup: f64,
    /// Efficiency `E = S / p`; ideal value 1.0.
    pub efficiency: f64,
    /// Overhead `To = p × Tp − Ts`, in seconds. May be negative.
    pub overhead_seconds: f64,
    /// `|pi_parallel − π|` against the mathematical constant.
    pub absolute_error: f64,
}

impl MetricsReport {
    /// Returns the overhead in milliseconds.
    #[inline]
    pub fn overhead_ms(&self) -> f64 {
        self.overhead_seconds * 1_000.0
    }
}

/// Computes the metrics report from the two run results.
///
/// Pure and deterministic given its inputs; no side effects.
///
/// # Errors
///
/// - [`MetricsError::InvalidWorkerCount`] when `workers` is zero.
/// - [`MetricsError::DegenerateTiming`] when the parallel elapsed time
///   is zero (fast hardware, tiny budget), in which case speedup and
///   efficiency are undefined and no report is emitted.
pub fn compute(
    seq: &RunResult,
    par: &RunResult,
    workers: usize,
) -> Result<MetricsReport, MetricsError> {
    if workers == 0 {
        return Err(MetricsError::InvalidWorkerCount(workers));
    }

    let ts = seq.elapsed.as_secs_f64();
    let tp = par.elapsed.as_secs_f64();
    if tp == 0.0 {
        return Err(MetricsError::DegenerateTiming);
    }

    let speedup = ts / tp;
    let pi_parallel = par.pi_estimate();

    Ok(MetricsReport {
        pi_sequential: seq.pi_estimate(),
        pi_parallel,
        speedup,
        efficiency: speedup / workers as f64,
        overhead_seconds: workers as f64 * tp - ts,
        absolute_error: (pi_parallel - std::f64::consts::PI).abs(),
    })
}

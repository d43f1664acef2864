//! Estimation run results.

use std::time::Duration;

/// Immutable outcome of one estimation run (sequential or parallel).
///
/// Invariant: `hits <= samples`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use estimator_kernel::engine::RunResult;
///
/// let result = RunResult {
///     samples: 1_000_000,
///     hits: 785_398,
///     elapsed: Duration::from_millis(12),
/// };
/// assert_eq!(result.pi_estimate(), 3.141592);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    /// Total number of points actually sampled.
    pub samples: u64,
    /// Number of points inside the unit quarter-circle.
    pub hits: u64,
    /// Measured wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RunResult {
    /// Returns the π estimate, `4 × hits / samples`.
    #[inline]
    pub fn pi_estimate(&self) -> f64 {
        4.0 * self.hits as f64 / self.samples as f64
    }

    /// Returns the elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_estimate_exact() {
        let result = RunResult {
            samples: 1_000_000,
            hits: 785_398,
            elapsed: Duration::ZERO,
        };
        assert_eq!(result.pi_estimate(), 3.141592);
    }

    #[test]
    fn test_elapsed_ms_conversion() {
        let result = RunResult {
            samples: 1,
            hits: 1,
            elapsed: Duration::from_micros(1_500),
        };
        assert_eq!(result.elapsed_ms(), 1.5);
    }
}

//! Estimation run configuration.
//!
//! This module provides [`RunConfig`], the immutable per-run
//! configuration shared by the sequential and parallel estimators, and
//! its builder.

use super::error::ConfigError;

/// Default total sample budget.
pub const DEFAULT_SAMPLES: u64 = 1_000_000;

/// Default worker count for the parallel path.
pub const DEFAULT_WORKERS: usize = 4;

/// Maximum number of workers allowed.
///
/// Guards against pathological pool sizes; practical concurrency limits
/// below this are the caller's responsibility.
pub const MAX_WORKERS: usize = 4096;

/// Immutable configuration for one estimation run.
///
/// Use [`RunConfig::builder`] to construct instances. The sample budget
/// and worker count are fixed for the lifetime of the run.
///
/// # Examples
///
/// ```rust
/// use estimator_kernel::engine::RunConfig;
///
/// let config = RunConfig::builder()
///     .samples(1_000_000)
///     .workers(4)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.samples(), 1_000_000);
/// assert_eq!(config.workers(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Total number of points to sample.
    samples: u64,
    /// Number of workers in the parallel pool.
    workers: usize,
    /// Optional base seed for reproducibility.
    seed: Option<u64>,
}

impl RunConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Returns the total sample budget.
    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Returns the parallel worker count.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the optional base seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// Estimators call this before any sampling, so a zero worker count
    /// never reaches a division and a zero budget never starts a run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `samples` is 0
    /// - `workers` is 0 or greater than [`MAX_WORKERS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSampleBudget(self.samples));
        }
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            workers: DEFAULT_WORKERS,
            seed: None,
        }
    }
}

/// Builder for [`RunConfig`].
///
/// Provides a fluent API with validation at build time. Unset fields
/// fall back to the defaults.
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    samples: Option<u64>,
    workers: Option<usize>,
    seed: Option<u64>,
}

impl RunConfigBuilder {
    /// Sets the total sample budget.
    #[inline]
    pub fn samples(mut self, samples: u64) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Sets the parallel worker count.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the base seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the sample budget or worker count is
    /// out of range.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let config = RunConfig {
            samples: self.samples.unwrap_or(DEFAULT_SAMPLES),
            workers: self.workers.unwrap_or(DEFAULT_WORKERS),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = RunConfig::builder().build().unwrap();
        assert_eq!(config.samples(), DEFAULT_SAMPLES);
        assert_eq!(config.workers(), DEFAULT_WORKERS);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_explicit_values() {
        let config = RunConfig::builder()
            .samples(10_000)
            .workers(8)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(config.samples(), 10_000);
        assert_eq!(config.workers(), 8);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = RunConfig::builder().samples(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidSampleBudget(0));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = RunConfig::builder().workers(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorkerCount(0));
    }

    #[test]
    fn test_excessive_workers_rejected() {
        let err = RunConfig::builder()
            .workers(MAX_WORKERS + 1)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorkerCount(MAX_WORKERS + 1));
    }
}

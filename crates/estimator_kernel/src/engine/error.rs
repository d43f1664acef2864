//! Error types for the estimation engine.
//!
//! Configuration errors are rejected before any estimator runs; worker
//! pool failures abort the whole run. No component retries or masks a
//! failure.

use super::config::MAX_WORKERS;

/// Configuration error for an estimation run.
///
/// These errors occur during validation, before any sampling starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Sample budget must be positive.
    #[error("invalid sample budget {0}: must be positive")]
    InvalidSampleBudget(u64),

    /// Worker count outside [1, MAX_WORKERS].
    #[error("invalid worker count {0}: must be in range [1, {MAX_WORKERS}]")]
    InvalidWorkerCount(usize),
}

/// Error produced by an estimation run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Worker pool could not be constructed; the run fails as a whole.
    #[error("worker pool construction failed: {0}")]
    WorkerPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidSampleBudget(0);
        assert!(err.to_string().contains("invalid sample budget 0"));

        let err = ConfigError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("invalid worker count 0"));

        let err = EngineError::WorkerPool("out of threads".to_string());
        assert!(err.to_string().contains("out of threads"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: EngineError = ConfigError::InvalidSampleBudget(0).into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}

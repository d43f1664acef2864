//! CLI error types.

use estimator_kernel::engine::EngineError;
use estimator_metrics::MetricsError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Error produced by the CLI layer.
///
/// Every failure aborts the run; no partial report is emitted.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Estimation engine failure.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Metrics computation failure.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// Report serialisation failure.
    #[error("failed to serialise report: {0}")]
    Serialise(#[from] serde_json::Error),
}

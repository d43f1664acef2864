//! Estimation engine orchestration.
//!
//! This module provides the two execution modes of the estimator:
//!
//! 1. Configuration and validation ([`RunConfig`])
//! 2. Budget partitioning across workers ([`partition`])
//! 3. Sequential execution ([`run_sequential`])
//! 4. Parallel execution on a fixed-size worker pool ([`run_parallel`])
//!
//! Both modes return a [`RunResult`] carrying the sample count, hit
//! count, and the measured wall-clock duration.

pub mod config;
pub mod error;
pub mod parallel;
pub mod partition;
pub mod result;
pub mod sequential;

// Re-exports for convenient access
pub use config::{RunConfig, RunConfigBuilder, DEFAULT_SAMPLES, DEFAULT_WORKERS, MAX_WORKERS};
pub use error::{ConfigError, EngineError};
pub use parallel::run_parallel;
pub use partition::partition;
pub use result::RunResult;
pub use sequential::run_sequential;

//! # Estimator Metrics (Analytics Layer)
//!
//! Derives parallel-performance metrics from the pair of
//! [`RunResult`]s produced by the estimation kernel:
//!
//! - **π estimates** for both modes: `4 × hits / samples`
//! - **Speedup** `S = Ts / Tp`
//! - **Efficiency** `E = S / p` (ideal value 1.0)
//! - **Overhead** `To = p × Tp − Ts` (signed; negative values indicate
//!   superlinear speedup or noisy timing and are reported as-is)
//! - **Absolute error** versus `std::f64::consts::PI`
//!
//! The calculator is pure and deterministic given its inputs. A
//! parallel elapsed time of zero makes speedup undefined and is
//! surfaced as [`MetricsError::DegenerateTiming`] rather than as
//! infinity or NaN.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::time::Duration;
//! use estimator_kernel::engine::RunResult;
//! use estimator_metrics::compute;
//!
//! let seq = RunResult { samples: 1_000_000, hits: 785_398, elapsed: Duration::from_millis(1000) };
//! let par = RunResult { samples: 1_000_000, hits: 785_123, elapsed: Duration::from_millis(300) };
//!
//! let report = compute(&seq, &par, 4).unwrap();
//! assert!((report.speedup - 10.0 / 3.0).abs() < 1e-12);
//! ```

mod report;

pub use report::{compute, MetricsError, MetricsReport};

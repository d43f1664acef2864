//! # Estimator Kernel (Estimation Engine)
//!
//! Monte Carlo π estimation engine. The kernel estimates π by sampling
//! uniform points in the unit square and counting those that fall inside
//! the unit quarter-circle; the hit ratio converges to π/4.
//!
//! Two execution modes share the same sampling kernel:
//!
//! - **Sequential**: one sampler, one thread of control
//!   ([`engine::run_sequential`])
//! - **Parallel**: a fixed-size worker pool, one independently seeded
//!   sampler per worker ([`engine::run_parallel`])
//!
//! Both modes measure wall-clock time so the analytics layer can derive
//! speedup, efficiency, and overhead from the pair of results.
//!
//! ## Architecture
//!
//! ```text
//! engine
//! ├── RunConfig        (sample budget, worker count, optional seed)
//! ├── partition        (per-worker sample counts)
//! ├── run_sequential   (single SamplerRng, timed)
//! └── run_parallel     (fresh rayon pool, one SamplerRng per worker)
//! rng
//! └── SamplerRng       (seeded StdRng wrapper, PointSource impl)
//! sample
//! └── count_hits       (quarter-circle hit counting)
//! ```
//!
//! ## Correctness-Critical Property
//!
//! Generator state is never shared across execution contexts. Every
//! worker owns a private [`rng::SamplerRng`]; the parallel path needs no
//! locks because the only shared step is the commutative sum of
//! per-worker hit counts.
//!
//! ## Usage Example
//!
//! ```rust
//! use estimator_kernel::engine::{run_parallel, run_sequential, RunConfig};
//!
//! let config = RunConfig::builder()
//!     .samples(100_000)
//!     .workers(4)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let seq = run_sequential(&config).unwrap();
//! let par = run_parallel(&config).unwrap();
//!
//! assert_eq!(seq.samples, 100_000);
//! assert_eq!(par.samples, 100_000);
//! println!("π ≈ {:.8}", par.pi_estimate());
//! ```

pub mod engine;
pub mod rng;
pub mod sample;

// Re-exports for convenient access
pub use engine::{
    partition, run_parallel, run_sequential, ConfigError, EngineError, RunConfig,
    RunConfigBuilder, RunResult,
};
pub use rng::{PointSource, SamplerRng};
pub use sample::count_hits;

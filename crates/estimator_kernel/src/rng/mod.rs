//! # Random Number Generation Infrastructure
//!
//! This module provides the random point sources used by the Monte Carlo
//! estimation kernel.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: generators support explicit seeding for
//!   deterministic sequences; unseeded runs draw from OS entropy
//! - **Independence**: one generator instance per execution context,
//!   with per-worker stream derivation ([`SamplerRng::from_stream`]) so
//!   concurrent workers never share or correlate generator state
//! - **Static dispatch only**: the [`PointSource`] seam is a generic
//!   bound, not `Box<dyn Trait>`, keeping the sampling loop free of
//!   virtual calls
//!
//! ## Module Structure
//!
//! - [`sampler`]: seeded PRNG wrapper producing uniform 2D points
//!
//! ## Usage Example
//!
//! ```rust
//! use estimator_kernel::rng::{PointSource, SamplerRng};
//!
//! // Seeded for reproducible runs
//! let mut rng = SamplerRng::from_seed(12345);
//! let (x, y) = rng.next_point();
//! assert!(x >= 0.0 && x < 1.0);
//! assert!(y >= 0.0 && y < 1.0);
//! ```

mod sampler;

// Public re-exports
pub use sampler::SamplerRng;

/// Source of uniform 2D points in [0,1)×[0,1).
///
/// This is the seam between random number generation and the sampling
/// kernel: estimators are generic over it, and tests inject scripted
/// sources to pin down exact counting behaviour.
pub trait PointSource {
    /// Returns the next point, advancing internal state.
    fn next_point(&mut self) -> (f64, f64);
}

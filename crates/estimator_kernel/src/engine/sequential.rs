//! Sequential estimation.

use std::time::Instant;

use super::config::RunConfig;
use super::error::EngineError;
use super::result::RunResult;
use crate::rng::SamplerRng;
use crate::sample::count_hits;

/// Runs the full sample budget on the calling thread.
///
/// Creates one [`SamplerRng`] and measures wall-clock time around the
/// single counting pass. The worker count in `config` is ignored here;
/// it only sizes the parallel pool.
///
/// # Errors
///
/// Returns [`EngineError::Config`] when the configuration is invalid.
pub fn run_sequential(config: &RunConfig) -> Result<RunResult, EngineError> {
    config.validate()?;

    let mut rng = match config.seed() {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    };

    let start = Instant::now();
    let hits = count_hits(&mut rng, config.samples());
    let elapsed = start.elapsed();

    Ok(RunResult {
        samples: config.samples(),
        hits,
        elapsed,
    })
}

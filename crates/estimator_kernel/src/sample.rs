//! Quarter-circle hit counting.
//!
//! The sampling kernel shared by the sequential and parallel estimators:
//! draw points from a [`PointSource`] and count those inside the closed
//! unit quarter-circle. The hit ratio times four converges to π.

use crate::rng::PointSource;

/// Draws exactly `n` points from `source` and returns how many fall
/// inside the unit quarter-circle.
///
/// A point counts as a hit when `x² + y² <= 1.0`; the boundary is
/// inclusive. The returned count satisfies `0 <= hits <= n`. The only
/// side effect is consuming `n` points from the source, so the result
/// is deterministic for a deterministic source.
pub fn count_hits<S: PointSource>(source: &mut S, n: u64) -> u64 {
    let mut hits = 0u64;
    for _ in 0..n {
        let (x, y) = source.next_point();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    hits
}

//! Sample budget partitioning.

use super::error::ConfigError;

/// Splits `samples` into `workers` per-worker counts.
///
/// Base size by floor division; the first `samples % workers` entries
/// get one extra point, so the sum always equals the requested budget
/// and no samples are silently dropped.
///
/// Invariants: `len == workers`, `sum == samples`, sizes differ by at
/// most one.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidWorkerCount`] when `workers` is zero;
/// a worker count of zero admits no partition.
pub fn partition(samples: u64, workers: usize) -> Result<Vec<u64>, ConfigError> {
    if workers == 0 {
        return Err(ConfigError::InvalidWorkerCount(workers));
    }
    let workers_u64 = workers as u64;
    let base = samples / workers_u64;
    let remainder = samples % workers_u64;

    Ok((0..workers_u64)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn even_division_splits_equally() {
        let parts = partition(1_000_000, 4).unwrap();
        assert_eq!(parts, vec![250_000; 4]);
    }

    #[test]
    fn remainder_spreads_over_leading_workers() {
        let parts = partition(10, 3).unwrap();
        assert_eq!(parts, vec![4, 3, 3]);
    }

    #[test]
    fn budget_smaller_than_pool_leaves_idle_workers() {
        let parts = partition(2, 4).unwrap();
        assert_eq!(parts, vec![1, 1, 0, 0]);
    }

    #[test]
    fn zero_workers_is_an_error_not_a_panic() {
        assert_eq!(partition(100, 0), Err(ConfigError::InvalidWorkerCount(0)));
    }

    proptest! {
        /// No samples are ever lost or invented by partitioning.
        #[test]
        fn sum_equals_budget(samples in 0u64..10_000_000, workers in 1usize..256) {
            let parts = partition(samples, workers).unwrap();
            prop_assert_eq!(parts.len(), workers);
            prop_assert_eq!(parts.iter().sum::<u64>(), samples);
        }

        /// Partition sizes are balanced to within one sample.
        #[test]
        fn sizes_differ_by_at_most_one(samples in 0u64..10_000_000, workers in 1usize..256) {
            let parts = partition(samples, workers).unwrap();
            let max = *parts.iter().max().unwrap();
            let min = *parts.iter().min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}

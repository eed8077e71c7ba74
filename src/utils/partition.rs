//! Contiguous partitioning of a sequence across a fixed number of workers.

use std::ops::Range;

/// Split `0..len` into `workers` contiguous, non-overlapping ranges.
///
/// The first `workers - 1` ranges hold `len / workers` elements each and the
/// last range absorbs the remainder. When `len < workers` the leading ranges
/// are empty. A worker count of zero is treated as one.
pub fn partition_bounds(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let segment = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * segment;
            let end = if i == workers - 1 { len } else { start + segment };
            start..end
        })
        .collect()
}

/// Sizes of the ranges produced by [`partition_bounds`].
pub fn segment_sizes(len: usize, workers: usize) -> Vec<usize> {
    partition_bounds(len, workers)
        .into_iter()
        .map(|r| r.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(len: usize, workers: usize) {
        let bounds = partition_bounds(len, workers);
        assert_eq!(bounds.len(), workers.max(1));

        let mut next = 0;
        for r in &bounds {
            assert_eq!(r.start, next, "gap or overlap at {next} (len={len}, w={workers})");
            assert!(r.end >= r.start);
            next = r.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn test_remainder_goes_to_last() {
        assert_eq!(segment_sizes(10, 4), vec![2, 2, 2, 4]);
        assert_eq!(segment_sizes(11, 3), vec![3, 3, 5]);
    }

    #[test]
    fn test_even_split() {
        assert_eq!(segment_sizes(12, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_fewer_points_than_workers() {
        assert_eq!(segment_sizes(3, 4), vec![0, 0, 0, 3]);
        assert_eq!(partition_bounds(3, 4)[3], 0..3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment_sizes(0, 4), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_single_worker() {
        assert_eq!(partition_bounds(7, 1), vec![0..7]);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(partition_bounds(5, 0), vec![0..5]);
    }

    #[test]
    fn test_exact_cover_grid() {
        for len in 0..40 {
            for workers in 1..12 {
                assert_exact_cover(len, workers);
            }
        }
    }
}

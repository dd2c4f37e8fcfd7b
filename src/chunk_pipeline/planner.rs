// In: src/chunk_pipeline/planner.rs

//! The chunk planner for runpack.
//!
//! Splits an input buffer of length `N` into `K` contiguous, non-overlapping
//! ranges covering `[0, N)`, one per worker. The order in which ranges are
//! produced is the reassembly order, and the orchestrator preserves it
//! through concurrent execution.

/// A half-open interval `[start, end)` over a buffer's indices, assigned to
/// exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Plans `worker_count` ranges over a buffer of `length` bytes.
///
/// Every range spans `length / worker_count` bytes except the last, which
/// runs to `length` and absorbs the remainder. For `length == 0` this yields
/// `worker_count` empty ranges; downstream stages must not index into the
/// buffer for an empty range.
pub fn plan_ranges(length: usize, worker_count: usize) -> Vec<ChunkRange> {
    let worker_count = worker_count.max(1);
    let base = length / worker_count;

    (0..worker_count)
        .map(|i| {
            let start = i * base;
            let end = if i == worker_count - 1 {
                length
            } else {
                (i + 1) * base
            };
            ChunkRange { start, end }
        })
        .collect()
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// The planner's core invariant: ranges are ascending, contiguous, and
    /// their union is exactly [0, length).
    fn assert_covers(ranges: &[ChunkRange], length: usize) {
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(length));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_even_split() {
        let ranges = plan_ranges(100, 4);
        assert_eq!(ranges.len(), 4);
        assert_covers(&ranges, 100);
        assert!(ranges.iter().all(|r| r.len() == 25));
    }

    #[test]
    fn test_last_range_absorbs_remainder() {
        let ranges = plan_ranges(103, 4);
        assert_eq!(ranges.len(), 4);
        assert_covers(&ranges, 103);
        assert_eq!(ranges[0].len(), 25);
        assert_eq!(ranges[3].len(), 28);
    }

    #[test]
    fn test_single_worker_takes_everything() {
        let ranges = plan_ranges(42, 1);
        assert_eq!(ranges, vec![ChunkRange { start: 0, end: 42 }]);
    }

    #[test]
    fn test_zero_length_yields_empty_ranges() {
        let ranges = plan_ranges(0, 3);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| r.is_empty()));
        assert_covers(&ranges, 0);
    }

    #[test]
    fn test_more_workers_than_bytes() {
        // base is 0, so every range but the last is empty.
        let ranges = plan_ranges(3, 8);
        assert_eq!(ranges.len(), 8);
        assert_covers(&ranges, 3);
        assert!(ranges[..7].iter().all(|r| r.is_empty()));
        assert_eq!(ranges[7], ChunkRange { start: 0, end: 3 });
    }

    #[test]
    fn test_zero_worker_count_is_clamped() {
        let ranges = plan_ranges(10, 0);
        assert_eq!(ranges, vec![ChunkRange { start: 0, end: 10 }]);
    }
}

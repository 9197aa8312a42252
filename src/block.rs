// SPDX-License-Identifier: MIT

//! In-place block primitives: range reversal, three-reversal rotation, and
//! leftmost binary search.
//!
//! These are the building blocks of rotation-based merging (the classical
//! block-merge technique that trades the O(n) merge buffer for O(log n)
//! extra time per merge). The current [`crate::sort`] path uses a buffered
//! merge and does not call them; they are kept as independently tested
//! utilities for a future O(1)-auxiliary-space merge variant.
//!
//! All ranges are half-open `[start, end)` over slice indices.

/// Reverses `data[start..end]` in place.
///
/// Swaps symmetric index pairs inward until the cursors meet or cross.
/// A range of length 0 or 1 is left untouched.
pub fn reverse_range<T>(data: &mut [T], start: usize, end: usize) {
    debug_assert!(start <= end && end <= data.len());
    data[start..end].reverse();
}

/// Rotates `data[start..end]` in place so that the block `[mid, end)` ends up
/// before the block `[start, mid)`, preserving the order within each block.
///
/// Implemented as three reversals: reverse `[start, mid)`, reverse
/// `[mid, end)`, then reverse the whole `[start, end)`.
pub fn rotate<T>(data: &mut [T], start: usize, mid: usize, end: usize) {
    debug_assert!(start <= mid && mid <= end && end <= data.len());
    reverse_range(data, start, mid);
    reverse_range(data, mid, end);
    reverse_range(data, start, end);
}

/// Returns the leftmost index in the sorted range `[start, end)` at which
/// `target` could be inserted while preserving order.
///
/// Every element before the returned index is strictly less than `target`.
/// Returns `start` when `target` is less than or equal to the first element
/// and `end` when `target` is greater than all elements. O(log n) comparisons.
#[must_use]
pub fn lower_bound<T: Ord>(data: &[T], start: usize, end: usize, target: &T) -> usize {
    debug_assert!(start <= end && end <= data.len());
    let (mut lo, mut hi) = (start, end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_range_full() {
        let mut data = vec![1, 2, 3, 4, 5];
        reverse_range(&mut data, 0, 5);
        assert_eq!(data, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_range_partial() {
        let mut data = vec![1, 2, 3, 4, 5];
        reverse_range(&mut data, 1, 4);
        assert_eq!(data, vec![1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_reverse_range_empty_and_single() {
        let mut data = vec![1, 2, 3];
        reverse_range(&mut data, 1, 1);
        assert_eq!(data, vec![1, 2, 3]);
        reverse_range(&mut data, 0, 1);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_rotate_swaps_blocks() {
        let mut data = vec![1, 2, 3, 10, 20];
        rotate(&mut data, 0, 3, 5);
        assert_eq!(data, vec![10, 20, 1, 2, 3]);
    }

    #[test]
    fn test_rotate_subrange() {
        let mut data = vec![0, 1, 2, 3, 4, 5, 6];
        rotate(&mut data, 1, 3, 6);
        assert_eq!(data, vec![0, 3, 4, 5, 1, 2, 6]);
    }

    #[test]
    fn test_rotate_degenerate_blocks() {
        // Empty left block: rotation is the identity
        let mut data = vec![1, 2, 3];
        rotate(&mut data, 0, 0, 3);
        assert_eq!(data, vec![1, 2, 3]);
        // Empty right block: also the identity
        rotate(&mut data, 0, 3, 3);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_lower_bound_interior() {
        let data = vec![10, 20, 20, 30, 40];
        assert_eq!(lower_bound(&data, 0, 5, &20), 1);
        assert_eq!(lower_bound(&data, 0, 5, &25), 3);
        assert_eq!(lower_bound(&data, 0, 5, &30), 3);
    }

    #[test]
    fn test_lower_bound_target_below_range() {
        // Target <= first element returns start
        let data = vec![10, 20, 30];
        assert_eq!(lower_bound(&data, 0, 3, &5), 0);
        assert_eq!(lower_bound(&data, 0, 3, &10), 0);
        assert_eq!(lower_bound(&data, 1, 3, &20), 1);
    }

    #[test]
    fn test_lower_bound_target_above_range() {
        // Target greater than all elements returns end
        let data = vec![10, 20, 30];
        assert_eq!(lower_bound(&data, 0, 3, &31), 3);
        assert_eq!(lower_bound(&data, 0, 2, &25), 2);
    }

    #[test]
    fn test_lower_bound_empty_range() {
        let data = vec![10, 20, 30];
        assert_eq!(lower_bound(&data, 2, 2, &0), 2);
    }

    #[test]
    fn test_lower_bound_all_equal() {
        // Leftmost position among equal elements
        let data = vec![7, 7, 7, 7];
        assert_eq!(lower_bound(&data, 0, 4, &7), 0);
    }
}

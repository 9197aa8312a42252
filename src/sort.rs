// SPDX-License-Identifier: MIT

//! Stable top-down merge sort over half-open index ranges.
//!
//! The merge copies the left half `[start, mid)` into a temporary buffer and
//! interleaves it with the right half in place. On equal elements the buffered
//! (originally left) element is written first, which makes both the merge and
//! the full sort stable. Auxiliary space is bounded by the largest single
//! merge's left half, at most `n / 2` elements, plus O(log n) recursion.
//!
//! The standard library's `sort_unstable` (pdqsort) is the comparison
//! baseline in the [`crate::bench`] harness; this module is the routine under
//! test.

/// Merges the two adjacent sorted ranges `[start, mid)` and `[mid, end)` of
/// `data` into one sorted range `[start, end)`, in place.
///
/// Stable: on ties the element from `[start, mid)` is written first. The
/// temporary buffer holds only the left half and is released on return.
///
/// Both sub-ranges must individually be sorted ascending. That precondition
/// is asserted in debug builds only; violating it in release builds yields
/// unspecified (not necessarily sorted) output.
pub fn merge<T: Ord + Clone>(data: &mut [T], start: usize, mid: usize, end: usize) {
    debug_assert!(start <= mid && mid <= end && end <= data.len());
    debug_assert!(data[start..mid].windows(2).all(|w| w[0] <= w[1]));
    debug_assert!(data[mid..end].windows(2).all(|w| w[0] <= w[1]));

    let left: Vec<T> = data[start..mid].to_vec();

    let mut left_index = 0;
    let mut right_index = mid;
    let mut out = start;

    while left_index < left.len() && right_index < end {
        if left[left_index] <= data[right_index] {
            data[out] = left[left_index].clone();
            left_index += 1;
        } else {
            data.swap(out, right_index);
            right_index += 1;
        }
        out += 1;
    }

    // Right remainder is already in place; only leftover buffer needs copying.
    while left_index < left.len() {
        data[out] = left[left_index].clone();
        left_index += 1;
        out += 1;
    }
}

/// Sorts `data[start..end]` ascending in place, stably.
///
/// Recursively halves the range at `start + (end - start) / 2`, sorts each
/// half, and combines with [`merge`]. Ranges of length 0 or 1 return
/// immediately.
pub fn merge_sort_range<T: Ord + Clone>(data: &mut [T], start: usize, end: usize) {
    debug_assert!(start <= end && end <= data.len());
    if end - start < 2 {
        return;
    }
    let mid = start + (end - start) / 2;
    merge_sort_range(data, start, mid);
    merge_sort_range(data, mid, end);
    merge(data, start, mid, end);
}

/// Sorts the whole slice ascending in place, stably.
///
/// Total for any `Ord` element type: empty and single-element slices are
/// returned untouched.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    merge_sort_range(data, 0, len);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sorted_multiset(data: &[i64]) -> Vec<i64> {
        let mut copy = data.to_vec();
        copy.sort_unstable();
        copy
    }

    proptest! {
        #[test]
        fn sort_produces_nondecreasing_permutation(
            data in proptest::collection::vec(any::<i64>(), 0..256),
        ) {
            let mut sorted = data.clone();
            merge_sort(&mut sorted);
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(sorted_multiset(&data), sorted);
        }

        #[test]
        fn sort_matches_stable_std_sort(
            data in proptest::collection::vec(-50i64..50, 0..256),
        ) {
            // Narrow value range forces many ties; both sorts are stable so
            // results must agree element-for-element
            let mut ours = data.clone();
            let mut std_sorted = data;
            merge_sort(&mut ours);
            std_sorted.sort();
            prop_assert_eq!(ours, std_sorted);
        }

        #[test]
        fn sort_is_idempotent(
            data in proptest::collection::vec(any::<i64>(), 0..256),
        ) {
            let mut once = data;
            merge_sort(&mut once);
            let mut twice = once.clone();
            merge_sort(&mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn merge_of_sorted_halves_is_sorted(
            mut left in proptest::collection::vec(any::<i64>(), 0..64),
            mut right in proptest::collection::vec(any::<i64>(), 0..64),
        ) {
            left.sort_unstable();
            right.sort_unstable();
            let mut data: Vec<i64> = left.iter().chain(right.iter()).copied().collect();
            let (mid, end) = (left.len(), data.len());
            merge(&mut data, 0, mid, end);
            prop_assert_eq!(data.len(), end);
            prop_assert!(data.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

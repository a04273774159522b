//! Partition-exchange sort and the element primitives it is built on.
//!
//! The sort is a classic two-cursor quicksort:
//! - **Pivot**: a snapshot (clone) of the first element of the range.
//! - **Scan**: the high cursor walks down past elements `>= pivot`, the element
//!   it stops on is swapped to the low cursor; then the low cursor walks up past
//!   elements `<= pivot` and is swapped back. This repeats until the cursors meet.
//! - **Recursion**: the two ranges on either side of the meeting point are sorted
//!   independently. The smaller one is recursed into and the larger one is looped
//!   on, which bounds stack depth by `O(log n)` even for sorted input.
//!
//! The sort is not stable.

use std::cmp::Ordering;
use tracing::trace;

#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Copies `element` so it can serve as a pivot unaffected by later swaps.
#[inline(always)]
pub fn snapshot<T: Clone>(element: &T) -> T {
    element.clone()
}

/// Exchanges the elements at `i` and `j`. A no-op when `i == j`.
#[inline(always)]
pub fn swap<T>(v: &mut [T], i: usize, j: usize) {
    if i != j {
        v.swap(i, j);
    }
}

/// Sorts `v` in place into non-decreasing order according to `compare`.
///
/// # Examples
///
/// ```
/// use slicekit::algo::quick_sort;
///
/// let mut v = [3, 1, 2];
/// quick_sort(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn quick_sort<T, F>(v: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    quick_sort_range(v, 0, len - 1, compare);
}

/// Sorts the inclusive index range `[low, high]` of `v` in place.
///
/// `high` is clamped to the last index. An empty or single-element range,
/// including `low >= high` after clamping, returns without touching `v`.
pub fn quick_sort_range<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(last) = v.len().checked_sub(1) else {
        return;
    };
    let high = high.min(last);
    if low >= high {
        return;
    }
    trace!(low, high, "quick_sort_range");

    let mut v = &mut v[low..=high];
    while v.len() >= 2 {
        let mid = partition(v, compare);

        let (left, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, compare);
            v = right;
        } else {
            quick_sort(right, compare);
            v = left;
        }
    }
}

/// Partitions `v` around a snapshot of `v[0]`.
///
/// Returns the index where the cursors met. On return every element left of it
/// compares `<=` the pivot and every element right of it compares `>=`.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = snapshot(&v[0]);
    let mut first = 0;
    let mut last = v.len() - 1;

    while first < last {
        while first < last && compare(&v[last], &pivot) != Ordering::Less {
            last -= 1;
        }
        swap(v, first, last);

        while first < last && compare(&v[first], &pivot) != Ordering::Greater {
            first += 1;
        }
        swap(v, first, last);
    }

    first
}

/// Parallel variant of [`quick_sort`].
///
/// When both halves of a partition are larger than an internal threshold they
/// are sorted with `rayon::join`, which returns only once both are done. The
/// halves are disjoint sub-slices, so no element is ever touched by two tasks.
/// A small half is sorted inline and the loop continues on the large one; after
/// `2 * log2(len)` nested joins the remaining range falls back to [`quick_sort`].
#[cfg(feature = "parallel")]
pub fn par_quick_sort<T, F>(v: &mut [T], compare: &F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let budget = 2 * (usize::BITS - v.len().leading_zeros());
    par_quick_sort_bounded(v, compare, budget);
}

#[cfg(feature = "parallel")]
fn par_quick_sort_bounded<T, F>(mut v: &mut [T], compare: &F, budget: u32)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let mut sequential = |a: &T, b: &T| compare(a, b);

    while budget > 0 && v.len() > PARALLEL_THRESHOLD {
        let mid = partition(v, &mut sequential);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let right = &mut rest[1..];
        let (small, large) = if left.len() < right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if small.len() <= PARALLEL_THRESHOLD {
            quick_sort(small, &mut sequential);
            v = large;
            continue;
        }

        rayon::join(
            || par_quick_sort_bounded(small, compare, budget - 1),
            || par_quick_sort_bounded(large, compare, budget - 1),
        );
        return;
    }

    quick_sort(v, &mut sequential);
}

//! Recursive sorting.

use crate::fold::partition;
use crate::primitives::split_head;
use log::trace;

/// Sorts by taking the head as pivot and partitioning the tail into the
/// elements `<= pivot` and those `> pivot`.
///
/// The pivot is split off before partitioning, so every recursive call sees a
/// strictly shorter sequence. Average cost is O(n log n); already sorted and
/// reverse-sorted input degrade to O(n²) time and O(n) recursion depth.
#[must_use]
pub fn quicksort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    let Some((pivot, rest)) = split_head(seq) else {
        return Vec::new();
    };
    let (less, more) = partition(rest, |x| x <= pivot);
    trace!("quicksort pivot split {} / {}", less.len(), more.len());

    [quicksort(&less), vec![pivot.clone()], quicksort(&more)].concat()
}

/// Merges two ascending sequences into one ascending sequence. On ties the
/// element from `left` comes first.
#[must_use]
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut left, mut right) = (left, right);
    loop {
        match (split_head(left), split_head(right)) {
            (Some((l, left_rest)), Some((r, right_rest))) => {
                if r < l {
                    merged.push(r.clone());
                    right = right_rest;
                } else {
                    merged.push(l.clone());
                    left = left_rest;
                }
            }
            (Some(_), None) => {
                merged.extend_from_slice(left);
                break;
            }
            (None, _) => {
                merged.extend_from_slice(right);
                break;
            }
        }
    }
    merged
}

/// Stable sort built on [`merge`]; recursion depth is `log2(len)`.
#[must_use]
pub fn merge_sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (front, back) = seq.split_at(seq.len() / 2);
    trace!("merge_sort halves {} / {}", front.len(), back.len());
    merge(&merge_sort(front), &merge_sort(back))
}

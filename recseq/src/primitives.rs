//! Layer-one operations. Every other operation in the crate bottoms out in
//! [`split_head`]: a sequence is either empty or a head followed by a tail.

use crate::error::{SeqError, SeqResult};

/// True when a value is present. The `None` case is what "ran off the end of the
/// sequence" looks like once a head has been taken.
#[inline]
#[must_use]
pub const fn def<T>(value: &Option<T>) -> bool {
    value.is_some()
}

#[inline]
#[must_use]
pub const fn undef<T>(value: &Option<T>) -> bool {
    !def(value)
}

#[inline]
#[must_use]
pub fn is_empty<T>(seq: &[T]) -> bool {
    undef(&split_head(seq))
}

/// Splits `seq` into its first element and the remaining elements.
#[inline]
#[must_use]
pub fn split_head<T>(seq: &[T]) -> Option<(&T, &[T])> {
    seq.split_first()
}

/// # Errors
/// [`SeqError::EmptySequence`] if `seq` has no elements.
#[inline]
pub fn head<T>(seq: &[T]) -> SeqResult<&T> {
    split_head(seq)
        .map(|(head, _)| head)
        .ok_or(SeqError::EmptySequence)
}

/// Everything but the first element, as a new sequence. The tail of an empty
/// sequence is empty.
#[must_use]
pub fn tail<T: Clone>(seq: &[T]) -> Vec<T> {
    split_head(seq).map_or_else(Vec::new, |(_, rest)| copy(rest))
}

/// A new, independently owned sequence holding the same elements in the same order.
#[must_use]
pub fn copy<T: Clone>(seq: &[T]) -> Vec<T> {
    let mut acc = Vec::with_capacity(seq.len());
    let mut rest = seq;
    while let Some((head, tail)) = split_head(rest) {
        acc.push(head.clone());
        rest = tail;
    }
    acc
}

/// Counts by peeling off one head per call; uses one stack frame per element.
#[must_use]
pub fn length<T>(seq: &[T]) -> usize {
    match split_head(seq) {
        Some((_, rest)) => 1 + length(rest),
        None => 0,
    }
}

/// Accumulator-passing count. The tail call is written as a loop, so the stack
/// stays flat regardless of input length.
#[must_use]
pub fn length_acc<T>(seq: &[T]) -> usize {
    let (mut rest, mut count) = (seq, 0usize);
    while let Some((_, tail)) = split_head(rest) {
        count += 1;
        rest = tail;
    }
    count
}

/// Reverses by reversing the tail and appending the head; one stack frame per element.
#[must_use]
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    match split_head(seq) {
        Some((head, rest)) => {
            let mut reversed = reverse(rest);
            reversed.push(head.clone());
            reversed
        }
        None => Vec::new(),
    }
}

/// Accumulator-passing reversal, peeling elements off the back.
#[must_use]
pub fn reverse_acc<T: Clone>(seq: &[T]) -> Vec<T> {
    let mut acc = Vec::with_capacity(seq.len());
    let mut rest = seq;
    while let Some((last, init)) = rest.split_last() {
        acc.push(last.clone());
        rest = init;
    }
    acc
}

//! Positional operations: leading and trailing runs, insertion and exchange.

use crate::error::{SeqError, SeqResult};
use crate::fold::{map_indexed, reduce, reverse};
use crate::primitives::split_head;

/// The leading `min(n, len)` elements; `n` defaults to 1 when `None`.
pub fn first<T: Clone>(seq: &[T], n: impl Into<Option<usize>>) -> Vec<T> {
    let n = n.into().unwrap_or(1);
    let mut taken = Vec::with_capacity(n.min(seq.len()));
    let mut rest = seq;
    while taken.len() < n {
        let Some((head, tail)) = split_head(rest) else {
            break;
        };
        taken.push(head.clone());
        rest = tail;
    }
    taken
}

/// The trailing `min(n, len)` elements, as `reverse(first(reverse(seq), n))`.
pub fn last<T: Clone>(seq: &[T], n: impl Into<Option<usize>>) -> Vec<T> {
    reverse(&first(&reverse(seq), n))
}

/// [`last`] without the double reversal: keeps each element whose position is
/// at least `len - n`.
pub fn last_by_index<T: Clone>(seq: &[T], n: impl Into<Option<usize>>) -> Vec<T> {
    let cutoff = seq.len().saturating_sub(n.into().unwrap_or(1));
    reduce(
        seq,
        |mut acc, x, index| {
            if index >= cutoff {
                acc.push(x.clone());
            }
            acc
        },
        Vec::new(),
    )
}

/// A new sequence with `value` inserted just before position `index`; an index
/// at or past the end appends.
pub fn slice<T: Clone>(seq: &[T], index: usize, value: T) -> Vec<T> {
    let mut inserted = reduce(
        seq,
        |mut acc, x, position| {
            if position == index {
                acc.push(value.clone());
            }
            acc.push(x.clone());
            acc
        },
        Vec::with_capacity(seq.len() + 1),
    );
    if index >= seq.len() {
        inserted.push(value);
    }
    inserted
}

/// A new sequence with the elements at `i` and `j` exchanged.
///
/// # Errors
/// [`SeqError::IndexOutOfRange`] naming the first of `i`, `j` that is not a
/// valid position.
pub fn swap<T: Clone>(seq: &[T], i: usize, j: usize) -> SeqResult<Vec<T>> {
    let len = seq.len();
    let (Some(at_i), Some(at_j)) = (seq.get(i), seq.get(j)) else {
        let index = if i >= len { i } else { j };
        return Err(SeqError::IndexOutOfRange { index, len });
    };
    Ok(map_indexed(seq, |x, position| {
        if position == i {
            at_j.clone()
        } else if position == j {
            at_i.clone()
        } else {
            x.clone()
        }
    }))
}

//! Catamorphism formulations over [`ListFrame`]s.
//!
//! The tail is always processed before its head, so these are right folds: the
//! `Cons` case receives the finished result for the rest of the sequence. The
//! [`recursion`] crate drives the frames from a heap-allocated stack, which
//! makes every function here safe on arbitrarily long input.

use recursion::CollapsibleExt;
use util::{CollapsibleSlice, ListFrame};

#[must_use]
pub fn length<T>(seq: &[T]) -> usize {
    CollapsibleSlice::new(seq).collapse_frames(|frame: ListFrame<&T, usize>| match frame {
        ListFrame::Cons(_, rest) => rest + 1,
        ListFrame::Nil => 0,
    })
}

#[must_use]
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    CollapsibleSlice::new(seq).collapse_frames(|frame: ListFrame<&T, Vec<T>>| match frame {
        ListFrame::Cons(x, mut reversed) => {
            reversed.push(x.clone());
            reversed
        }
        ListFrame::Nil => Vec::with_capacity(seq.len()),
    })
}

/// Maps every element; `f` is applied from the last element backwards.
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut mapped = CollapsibleSlice::new(seq).collapse_frames(|frame: ListFrame<&T, Vec<U>>| {
        match frame {
            ListFrame::Cons(x, mut acc) => {
                acc.push(f(x));
                acc
            }
            ListFrame::Nil => Vec::with_capacity(seq.len()),
        }
    });
    mapped.reverse();
    mapped
}

/// Filters the sequence; `predicate` is applied from the last element backwards.
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut kept = CollapsibleSlice::new(seq).collapse_frames(|frame: ListFrame<&T, Vec<T>>| {
        match frame {
            ListFrame::Cons(x, mut acc) => {
                if predicate(x) {
                    acc.push(x.clone());
                }
                acc
            }
            ListFrame::Nil => Vec::new(),
        }
    });
    kept.reverse();
    kept
}

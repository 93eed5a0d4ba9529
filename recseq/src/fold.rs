//! The universal fold and everything that can be expressed with it.
//!
//! [`reduce`] walks a sequence head by head, threading an accumulator and the
//! element's position through a folding function. Its tail call is written as
//! a loop, so every operation in this module runs in constant stack space.

use crate::nested::Nested;
use crate::primitives::split_head;
use std::collections::VecDeque;

/// Left fold: `f(…f(f(initial, e0, 0), e1, 1)…, eN-1, N-1)`.
pub fn reduce<T, A, F>(seq: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let (mut rest, mut acc, mut index) = (seq, initial, 0usize);
    while let Some((head, tail)) = split_head(rest) {
        acc = f(acc, head, index);
        rest = tail;
        index += 1;
    }
    acc
}

/// [`reduce`] with a fallible folding function; stops at the first error.
///
/// # Errors
/// Whatever `f` returns first.
pub fn try_reduce<T, A, E, F>(seq: &[T], mut f: F, initial: A) -> Result<A, E>
where
    F: FnMut(A, &T, usize) -> Result<A, E>,
{
    let (mut rest, mut acc, mut index) = (seq, initial, 0usize);
    while let Some((head, tail)) = split_head(rest) {
        acc = f(acc, head, index)?;
        rest = tail;
        index += 1;
    }
    Ok(acc)
}

/// Right fold, equal to [`reduce`] over the reversed sequence: the last element
/// is combined first and receives index `0`.
pub fn reduce_right<T, A, F>(seq: &[T], mut f: F, initial: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let (mut rest, mut acc, mut index) = (seq, initial, 0usize);
    while let Some((last, init)) = rest.split_last() {
        acc = f(acc, last, index);
        rest = init;
        index += 1;
    }
    acc
}

#[must_use]
pub fn length<T>(seq: &[T]) -> usize {
    reduce(seq, |count, _, _| count + 1, 0)
}

/// Prepends every element onto the accumulator.
#[must_use]
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    let reversed = reduce(
        seq,
        |mut acc: VecDeque<T>, x, _| {
            acc.push_front(x.clone());
            acc
        },
        VecDeque::with_capacity(seq.len()),
    );
    Vec::from(reversed)
}

pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    map_indexed(seq, |x, _| f(x))
}

/// [`map`] with the element's position passed alongside it.
pub fn map_indexed<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    reduce(
        seq,
        |mut acc, x, index| {
            acc.push(f(x, index));
            acc
        },
        Vec::with_capacity(seq.len()),
    )
}

pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    reduce(
        seq,
        |mut acc, x, _| {
            if predicate(x) {
                acc.push(x.clone());
            }
            acc
        },
        Vec::new(),
    )
}

/// Complement of [`filter`]: keeps the elements `predicate` rejects.
pub fn reject<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(seq, |x| !predicate(x))
}

/// `(filter(seq, predicate), reject(seq, predicate))`, computed in one pass.
pub fn partition<T, P>(seq: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    reduce(
        seq,
        |(mut kept, mut rejected), x, _| {
            if predicate(x) {
                kept.push(x.clone());
            } else {
                rejected.push(x.clone());
            }
            (kept, rejected)
        },
        (Vec::new(), Vec::new()),
    )
}

/// Appends leaves as they are met and recurses into nested sequences; stack
/// depth follows the nesting depth, not the length.
#[must_use]
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    reduce(
        seq,
        |mut acc, element, _| {
            match element {
                Nested::Item(x) => acc.push(x.clone()),
                Nested::Seq(inner) => acc.extend(flatten(inner)),
            }
            acc
        },
        Vec::new(),
    )
}

//! Head/tail recursive formulations.
//!
//! Each function handles the head, recurses on the tail and recombines. That
//! costs one stack frame per element, so callers with large inputs should go
//! through [`RecursionConfig::run`](crate::config::RecursionConfig::run) or use
//! the [`fold`](crate::fold) formulations instead.
//!
//! Results are built back to front while the recursion unwinds (pushing is
//! cheap, prepending is not) and flipped once at the end.

use crate::nested::Nested;
use crate::primitives::split_head;

#[must_use]
pub fn copy<T: Clone>(seq: &[T]) -> Vec<T> {
    map(seq, T::clone)
}

pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    fn go<T, U, F: FnMut(&T) -> U>(seq: &[T], f: &mut F) -> Vec<U> {
        match split_head(seq) {
            Some((head, rest)) => {
                let mapped = f(head);
                let mut out = go(rest, f);
                out.push(mapped);
                out
            }
            None => Vec::with_capacity(0),
        }
    }

    let mut out = go(seq, &mut f);
    out.reverse();
    out
}

pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    fn go<T: Clone, P: FnMut(&T) -> bool>(seq: &[T], predicate: &mut P) -> Vec<T> {
        match split_head(seq) {
            Some((head, rest)) => {
                let keep = predicate(head);
                let mut out = go(rest, predicate);
                if keep {
                    out.push(head.clone());
                }
                out
            }
            None => Vec::new(),
        }
    }

    let mut out = go(seq, &mut predicate);
    out.reverse();
    out
}

pub fn reject<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(seq, |x| !predicate(x))
}

pub fn partition<T, P>(seq: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let kept = filter(seq, &mut predicate);
    let rejected = reject(seq, predicate);
    (kept, rejected)
}

/// Recurses along the sequence and into every nested sequence it meets.
#[must_use]
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    match split_head(seq) {
        Some((Nested::Item(x), rest)) => {
            let mut out = vec![x.clone()];
            out.extend(flatten(rest));
            out
        }
        Some((Nested::Seq(inner), rest)) => {
            let mut out = flatten(inner);
            out.extend(flatten(rest));
            out
        }
        None => Vec::new(),
    }
}

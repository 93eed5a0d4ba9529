//! Sequences whose elements may themselves be sequences.

use crate::fold::reduce;
use derive_more::IsVariant;
use recursion::{Collapsible, CollapsibleExt, MappableFrame, PartiallyApplied};
use std::{mem, slice};
use util::NestedFrame;

/// An element of a nested sequence: a scalar, or a sequence of further elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<Nested<T>>),
}

/// Builds a [`Nested`] value from bracketed literals, e.g.
/// `nested!([1, [2, [3]]])`. Negative literals need parentheses: `(-1)`.
#[macro_export]
macro_rules! nested {
    ([$($inner:tt),* $(,)?]) => {
        $crate::nested::Nested::Seq(vec![$($crate::nested!($inner)),*])
    };
    ($item:expr) => {
        $crate::nested::Nested::Item($item)
    };
}

impl<T> Nested<T> {
    /// Whether this element is a sequence that [`flatten`] should descend into.
    #[inline]
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.is_seq()
    }

    /// The elements of a sequence; a scalar is viewed as a one-element sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[Nested<T>] {
        match self {
            Nested::Seq(items) => items,
            item @ Nested::Item(_) => slice::from_ref(item),
        }
    }

    /// Nesting depth: `0` for a scalar, one more than the deepest child for a sequence.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.collapse_frames(|frame: NestedFrame<&T, usize>| match frame {
            NestedFrame::Leaf(_) => 0,
            NestedFrame::Branch(depths) => 1 + depths.into_iter().max().unwrap_or(0),
        })
    }

    /// Every scalar in depth-first, left-to-right order.
    #[must_use]
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collapse_frames(|frame: NestedFrame<&T, Vec<T>>| match frame {
            NestedFrame::Leaf(x) => vec![x.clone()],
            NestedFrame::Branch(parts) => parts.into_iter().flatten().collect(),
        })
    }
}

// Children are moved onto a heap work list before they drop, so tearing down
// a deep value never recurses.
impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let Nested::Seq(items) = self else {
            return;
        };
        let mut pending = mem::take(items);
        while let Some(mut element) = pending.pop() {
            if let Nested::Seq(inner) = &mut element {
                pending.append(inner);
            }
        }
    }
}

impl<'a, T> Collapsible for &'a Nested<T> {
    type FrameToken = NestedFrame<&'a T, PartiallyApplied>;

    #[inline]
    fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
        match self {
            Nested::Item(x) => NestedFrame::Leaf(x),
            Nested::Seq(items) => NestedFrame::Branch(items.iter().collect()),
        }
    }
}

#[inline]
#[must_use]
pub fn is_sequence<T>(element: &Nested<T>) -> bool {
    element.is_sequence()
}

/// Expands every nested sequence into one flat sequence, depth-first and left to
/// right; scalars pass through unchanged. Nesting depth is unbounded: the
/// traversal keeps its work list on the heap.
#[must_use]
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    reduce(
        seq,
        |mut acc, element, _| {
            acc.extend(element.flatten());
            acc
        },
        Vec::new(),
    )
}

/// One layer of a cons-list: either a head element with the (already
/// processed) rest of the list, or the end of the list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListFrame<X, XS> {
    Cons(X, XS),
    Nil,
}

/// Borrowed slice viewed as a cons-list, split with [`slice::split_first`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CollapsibleSlice<'a, T>(pub &'a [T]);

impl<'a, T> CollapsibleSlice<'a, T> {
    #[inline]
    #[must_use]
    pub const fn new(slice: &'a [T]) -> Self {
        Self(slice)
    }

    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.0
    }
}

mod impls {
    use crate::recursion::list::{CollapsibleSlice, ListFrame};
    use recursion::{Collapsible, MappableFrame, PartiallyApplied};

    impl<X> MappableFrame for ListFrame<X, PartiallyApplied> {
        type Frame<XS> = ListFrame<X, XS>;

        #[inline]
        fn map_frame<A, B>(input: Self::Frame<A>, mut f: impl FnMut(A) -> B) -> Self::Frame<B> {
            match input {
                ListFrame::Cons(x, xs) => ListFrame::Cons(x, f(xs)),
                ListFrame::Nil => ListFrame::Nil,
            }
        }
    }

    impl<'a, T: 'a> Collapsible for CollapsibleSlice<'a, T> {
        type FrameToken = ListFrame<&'a T, PartiallyApplied>;

        #[inline]
        fn into_frame(self) -> <Self::FrameToken as MappableFrame>::Frame<Self> {
            match self.0.split_first() {
                Some((first, rest)) => ListFrame::Cons(first, CollapsibleSlice(rest)),
                None => ListFrame::Nil,
            }
        }
    }

    impl<'a, T> From<&'a [T]> for CollapsibleSlice<'a, T> {
        #[inline]
        fn from(value: &'a [T]) -> Self {
            CollapsibleSlice(value)
        }
    }

    impl<'a, T> From<&'a Vec<T>> for CollapsibleSlice<'a, T> {
        #[inline]
        fn from(value: &'a Vec<T>) -> Self {
            CollapsibleSlice(value.as_slice())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::recursion::list::{CollapsibleSlice, ListFrame};
    use recursion::CollapsibleExt;

    #[test]
    fn collapse_counts_every_cons_frame() {
        let xs = [3, 1, 4, 1, 5];
        let count = CollapsibleSlice::from(&xs[..]).collapse_frames(|frame: ListFrame<&i32, usize>| match frame {
            ListFrame::Cons(_, rest) => rest + 1,
            ListFrame::Nil => 0usize,
        });
        assert_eq!(count, xs.len());
    }

    #[test]
    fn collapse_visits_elements_from_the_back() {
        let xs = vec!['a', 'b', 'c'];
        let seen = CollapsibleSlice::from(&xs).collapse_frames(|frame: ListFrame<&char, Vec<char>>| {
            match frame {
                ListFrame::Cons(x, mut acc) => {
                    acc.push(*x);
                    acc
                }
                ListFrame::Nil => Vec::new(),
            }
        });
        assert_eq!(seen, vec!['c', 'b', 'a']);
    }

    #[test]
    fn collapse_survives_inputs_longer_than_the_call_stack() {
        let xs = vec![1u64; 1_000_000];
        let sum = CollapsibleSlice::new(&xs).collapse_frames(|frame: ListFrame<&u64, u64>| match frame {
            ListFrame::Cons(x, acc) => acc + x,
            ListFrame::Nil => 0,
        });
        assert_eq!(sum, 1_000_000);
    }
}

//! Method syntax for the free functions, on any slice (and so on `Vec`s and arrays).

use crate::error::SeqResult;
use crate::{fold, numeric, primitives, select, sort};
use extend::ext;
use util::private;

/// Trait for holding all the sequence extension methods.
#[ext(pub, name = SeqExt, supertraits = private::Sealed)]
impl<T> [T] {
    /// See [`primitives::head`].
    fn head(&self) -> SeqResult<&T> {
        primitives::head(self)
    }

    /// See [`primitives::tail`].
    fn tail(&self) -> Vec<T>
    where
        T: Clone,
    {
        primitives::tail(self)
    }

    fn length(&self) -> usize {
        fold::length(self)
    }

    fn reversed(&self) -> Vec<T>
    where
        T: Clone,
    {
        fold::reverse(self)
    }

    fn fold_left<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        fold::reduce(self, f, initial)
    }

    fn fold_right<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        fold::reduce_right(self, f, initial)
    }

    fn mapped<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        fold::map(self, f)
    }

    fn filtered<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        fold::filter(self, predicate)
    }

    fn rejected<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        fold::reject(self, predicate)
    }

    fn partitioned<P>(&self, predicate: P) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        fold::partition(self, predicate)
    }

    fn first_n(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        select::first(self, n)
    }

    fn last_n(&self, n: usize) -> Vec<T>
    where
        T: Clone,
    {
        select::last(self, n)
    }

    /// See [`select::slice`].
    fn insert_at(&self, index: usize, value: T) -> Vec<T>
    where
        T: Clone,
    {
        select::slice(self, index, value)
    }

    /// See [`select::swap`].
    fn swapped(&self, i: usize, j: usize) -> SeqResult<Vec<T>>
    where
        T: Clone,
    {
        select::swap(self, i, j)
    }

    fn smallest(&self) -> T
    where
        T: numeric::Extremum + Clone,
    {
        numeric::min(self)
    }

    fn largest(&self) -> T
    where
        T: numeric::Extremum + Clone,
    {
        numeric::max(self)
    }

    fn quicksorted(&self) -> Vec<T>
    where
        T: PartialOrd + Clone,
    {
        sort::quicksort(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SeqError;
    use crate::ext::SeqExt;

    #[test]
    fn methods_delegate_to_the_free_functions() {
        let xs = vec![3, 1, 2];
        assert_eq!(xs.head(), Ok(&3));
        assert_eq!(xs.tail(), vec![1, 2]);
        assert_eq!(xs.length(), 3);
        assert_eq!(xs.reversed(), vec![2, 1, 3]);
        assert_eq!(xs.mapped(|x| x * 10), vec![30, 10, 20]);
        assert_eq!(xs.filtered(|x| *x > 1), vec![3, 2]);
        assert_eq!(xs.rejected(|x| *x > 1), vec![1]);
        assert_eq!(xs.partitioned(|x| *x > 1), (vec![3, 2], vec![1]));
        assert_eq!(xs.first_n(2), vec![3, 1]);
        assert_eq!(xs.last_n(2), vec![1, 2]);
        assert_eq!(xs.insert_at(1, 9), vec![3, 9, 1, 2]);
        assert_eq!(xs.swapped(0, 2), Ok(vec![2, 1, 3]));
        assert_eq!(xs.smallest(), 1);
        assert_eq!(xs.largest(), 3);
        assert_eq!(xs.quicksorted(), vec![1, 2, 3]);
        assert_eq!(xs.fold_left(|acc, x, _| acc * 10 + x, 0), 312);
        assert_eq!(xs.fold_right(|acc, x, _| acc * 10 + x, 0), 213);
    }

    #[test]
    fn methods_report_errors() {
        let empty: [u8; 0] = [];
        assert_eq!(empty.head(), Err(SeqError::EmptySequence));
        assert!(matches!(
            [1].swapped(0, 1),
            Err(SeqError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }
}

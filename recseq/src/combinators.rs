//! Higher-order functions that build new functions out of existing ones.
//!
//! Variadic argument lists are modelled as argument sequences (`&[A]`), and every
//! combinator returns a closure or small struct owning what it captured.

use crate::error::{SeqError, SeqResult};
use crate::fold::{reduce, reduce_right, reverse};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// A boxed function from `T` to `T`, the element type of [`flow`] and [`compose`].
pub type Endo<'a, T> = Box<dyn Fn(T) -> T + 'a>;

#[inline]
pub fn boxed_endo<'a, T, F: Fn(T) -> T + 'a>(f: F) -> Endo<'a, T> {
    Box::new(f)
}

/// Something callable with one argument: every `Fn(A) -> B`, plus [`Compose`]
/// chains built out of them.
pub trait F1<A> {
    type Output;

    fn call1(&self, a: A) -> Self::Output;
}

/// `f` followed by `g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Compose<F, G> {
    f: F,
    g: G,
}

/// The function that returns its argument; ends single-element pipelines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

mod f1_impls {
    use crate::combinators::{Compose, F1, Identity};

    impl<F, A, B> F1<A> for F
    where
        F: Fn(A) -> B,
    {
        type Output = B;

        #[inline]
        fn call1(&self, a: A) -> B {
            self(a)
        }
    }

    impl<F, G, A> F1<A> for Compose<F, G>
    where
        F: F1<A>,
        G: F1<F::Output>,
    {
        type Output = G::Output;

        #[inline]
        fn call1(&self, a: A) -> Self::Output {
            self.g.call1(self.f.call1(a))
        }
    }

    impl<A> F1<A> for Identity {
        type Output = A;

        #[inline]
        fn call1(&self, a: A) -> A {
            a
        }
    }
}

impl<F, G> Compose<F, G> {
    /// See [`Compose`]
    #[inline]
    pub const fn new(f: F, g: G) -> Self {
        Self { f, g }
    }

    /// Appends `h` to the end of the pipeline.
    #[inline]
    pub const fn chain<H>(self, h: H) -> Compose<Self, H> {
        Compose { f: self, g: h }
    }

    #[inline]
    pub fn call<A>(&self, a: A) -> <Self as F1<A>>::Output
    where
        Self: F1<A>,
    {
        self.call1(a)
    }
}

/// Left-to-right pipeline: `flow!(f, g, h).call(x) == h(g(f(x)))`.
#[macro_export]
macro_rules! flow {
    (@chain $acc:expr $(,)?) => {
        $acc
    };
    (@chain $acc:expr, $next:expr $(, $rest:expr)* $(,)?) => {
        $crate::flow!(@chain $crate::combinators::Compose::chain($acc, $next) $(, $rest)*)
    };
    ($f:expr $(,)?) => {
        $crate::combinators::Compose::new($f, $crate::combinators::Identity)
    };
    ($f:expr, $g:expr $(, $rest:expr)* $(,)?) => {
        $crate::flow!(@chain $crate::combinators::Compose::new($f, $g) $(, $rest)*)
    };
}

/// Right-to-left composition: `compose!(f, g, h).call(x) == f(g(h(x)))`.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $crate::flow!($f)
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::Compose::new($crate::compose!($($rest),+), $f)
    };
}

/// Runs `fns` first to last, each on the previous result.
pub fn flow<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |x| reduce(&fns, |acc, f, _| f(acc), x)
}

/// Runs `fns` last to first: [`flow`] over the reversed sequence.
pub fn compose<'a, T: 'a>(fns: Vec<Endo<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |x| reduce_right(&fns, |acc, f, _| f(acc), x)
}

/// Fixes the leading arguments of `f`: the result calls `f(bound ++ further)`.
pub fn partial<A, R, F>(f: F, bound: Vec<A>) -> impl Fn(&[A]) -> R
where
    A: Clone,
    F: Fn(&[A]) -> R,
{
    move |further: &[A]| {
        let args: Vec<A> = bound.iter().chain(further).cloned().collect();
        f(&args)
    }
}

/// Binary [`partial`]: fixes the first argument of a two-argument function.
pub fn partial2<A, B, R, F>(f: F, a: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |b| f(a.clone(), b)
}

/// Calls `f` with its argument sequence reversed.
pub fn reverse_args<A, R, F>(f: F) -> impl Fn(&[A]) -> R
where
    A: Clone,
    F: Fn(&[A]) -> R,
{
    move |args: &[A]| f(&reverse(args))
}

/// Binary [`reverse_args`].
pub fn flip<A, B, R, F>(f: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b, a| f(a, b)
}

/// A function over an argument sequence, callable with any iterable of
/// arguments. Built by [`spread_arg`].
#[derive(Clone, Copy, Debug)]
pub struct Spread<F>(F);

impl<F> Spread<F> {
    /// Collects `args` into a sequence and passes it on.
    pub fn call<A, R, I>(&self, args: I) -> R
    where
        F: Fn(&[A]) -> R,
        I: IntoIterator<Item = A>,
    {
        let collected: Vec<A> = args.into_iter().collect();
        (self.0)(&collected)
    }

    #[inline]
    pub fn into_inner(self) -> F {
        self.0
    }
}

#[inline]
pub const fn spread_arg<F>(f: F) -> Spread<F> {
    Spread(f)
}

/// Containers whose values can be looked up by a key of type `K`.
pub trait Keyed<K> {
    type Value;

    fn lookup(&self, key: &K) -> Option<&Self::Value>;
}

impl<K: Ord, V> Keyed<K> for BTreeMap<K, V> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Keyed<K> for HashMap<K, V, S> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Keyed<usize> for [T] {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Keyed<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.as_slice().lookup(key)
    }
}

/// `obj[key]`.
///
/// # Errors
/// [`SeqError::MissingKey`] when `obj` has no value under `key`.
pub fn pluck<K, O>(key: K, obj: &O) -> SeqResult<&O::Value>
where
    K: Debug,
    O: Keyed<K> + ?Sized,
{
    obj.lookup(&key).ok_or_else(|| SeqError::MissingKey {
        key: format!("{key:?}"),
    })
}

/// [`pluck`] with the key fixed, ready to hand to `map`.
pub fn pluck_by<K, O>(key: K) -> impl Fn(&O) -> SeqResult<&O::Value>
where
    K: Clone + Debug,
    O: Keyed<K> + ?Sized,
{
    move |obj: &O| pluck(key.clone(), obj)
}

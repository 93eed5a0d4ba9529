//! Arithmetic folds and the classic recursive number functions.

use crate::error::{SeqError, SeqResult};
use crate::fold::{reduce, try_reduce};
use crate::primitives::split_head;
use std::ops::{Add, Div, Mul};

/// Identity elements for `min`/`max`: the greatest value is smaller than
/// nothing, so folding with it never changes a minimum (and vice versa).
pub trait Extremum: PartialOrd + Sized {
    fn greatest() -> Self;
    fn least() -> Self;
}

/// Values the arithmetic folds can combine. The `try_*` operations return
/// `None` where integer arithmetic would overflow; floats always succeed.
pub trait Numeric:
    Copy + PartialEq + Add<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
    fn try_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integers {
    ($($t:ty),* $(,)?) => {$(
        impl Extremum for $t {
            #[inline]
            fn greatest() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn least() -> Self {
                <$t>::MIN
            }
        }

        impl Numeric for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }

            #[inline]
            fn try_div(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_floats {
    ($($t:ty),* $(,)?) => {$(
        impl Extremum for $t {
            #[inline]
            fn greatest() -> Self {
                <$t>::INFINITY
            }

            #[inline]
            fn least() -> Self {
                <$t>::NEG_INFINITY
            }
        }

        impl Numeric for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            #[inline]
            fn try_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }
    )*};
}

impl_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floats!(f32, f64);

/// The smallest element, or [`Extremum::greatest`] for an empty sequence.
pub fn min<T: Extremum + Clone>(seq: &[T]) -> T {
    reduce(
        seq,
        |smallest, x, _| if *x < smallest { x.clone() } else { smallest },
        T::greatest(),
    )
}

/// The largest element, or [`Extremum::least`] for an empty sequence.
pub fn max<T: Extremum + Clone>(seq: &[T]) -> T {
    reduce(
        seq,
        |largest, x, _| if *x > largest { x.clone() } else { largest },
        T::least(),
    )
}

/// Sum of all elements; `0` when empty.
///
/// # Errors
/// [`SeqError::ArithmeticOverflow`] at the first element that overflows the sum.
pub fn add<T: Numeric>(seq: &[T]) -> SeqResult<T> {
    try_reduce(
        seq,
        |sum, &x, index| {
            sum.try_add(x).ok_or(SeqError::ArithmeticOverflow {
                operation: "add",
                index,
            })
        },
        T::ZERO,
    )
}

/// Product of all elements; `1` when empty.
///
/// # Errors
/// [`SeqError::ArithmeticOverflow`] at the first element that overflows the product.
pub fn multiply<T: Numeric>(seq: &[T]) -> SeqResult<T> {
    try_reduce(
        seq,
        |product, &x, index| {
            product.try_mul(x).ok_or(SeqError::ArithmeticOverflow {
                operation: "multiply",
                index,
            })
        },
        T::ONE,
    )
}

/// Divides the head by every following element in turn.
///
/// # Errors
/// - [`SeqError::EmptySequence`] when there is nothing to divide.
/// - [`SeqError::DivideByZero`] with the position of the first zero divisor.
/// - [`SeqError::ArithmeticOverflow`] where an integer quotient does not fit
///   (`MIN / -1`).
pub fn divide<T: Numeric>(seq: &[T]) -> SeqResult<T> {
    let (&dividend, divisors) = split_head(seq).ok_or(SeqError::EmptySequence)?;
    try_reduce(
        divisors,
        |quotient, &divisor, index| {
            if divisor == T::ZERO {
                Err(SeqError::DivideByZero { index: index + 1 })
            } else {
                quotient
                    .try_div(divisor)
                    .ok_or(SeqError::ArithmeticOverflow {
                        operation: "divide",
                        index: index + 1,
                    })
            }
        },
        dividend,
    )
}

/// `n!`, computed by accumulator recursion.
///
/// # Errors
/// [`SeqError::Overflow`] once the product no longer fits in a `u64` (`n > 20`).
pub fn factorial(n: u64) -> SeqResult<u64> {
    fn go(n: u64, acc: u64) -> Option<u64> {
        match n {
            0 | 1 => Some(acc),
            _ => go(n - 1, acc.checked_mul(n)?),
        }
    }

    go(n, 1).ok_or(SeqError::Overflow {
        operation: "factorial",
        input: n,
    })
}

/// Fibonacci by naive double recursion, with `fib(n) == 1` for `n <= 2`.
///
/// Takes exponential time; it is here to show the shape of the recursion,
/// not to compute large terms. Terms from `fib(93)` on exceed `u64`.
#[must_use]
pub fn fib(n: u32) -> u64 {
    if n <= 2 { 1 } else { fib(n - 1) + fib(n - 2) }
}

#[cfg(test)]
mod tests {
    use crate::error::SeqError;
    use crate::numeric::{add, divide, factorial, fib, max, min, multiply};
    use approx::assert_relative_eq;

    #[test]
    fn min_and_max() {
        assert_eq!(min(&[4, -2, 9]), -2);
        assert_eq!(max(&[4, -2, 9]), 9);
        assert_eq!(min(&[2.5, 0.5]), 0.5);
    }

    #[test]
    fn empty_extrema_are_comparison_identities() {
        assert_eq!(min::<f64>(&[]), f64::INFINITY);
        assert_eq!(max::<f64>(&[]), f64::NEG_INFINITY);
        assert_eq!(min::<i32>(&[]), i32::MAX);
        assert_eq!(max::<u8>(&[]), u8::MIN);
    }

    #[test]
    fn arithmetic_folds() {
        assert_eq!(add(&[1, 2, 3, 4]), Ok(10));
        assert_eq!(multiply(&[1, 2, 3, 4]), Ok(24));
        assert_eq!(add::<i64>(&[]), Ok(0));
        assert_eq!(multiply::<i64>(&[]), Ok(1));
        assert_relative_eq!(add(&[0.1, 0.2]).unwrap_or(f64::NAN), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(
            add(&[1, i32::MAX, 5]),
            Err(SeqError::ArithmeticOverflow {
                operation: "add",
                index: 1
            })
        );
        assert_eq!(
            multiply(&[255u8, 2]),
            Err(SeqError::ArithmeticOverflow {
                operation: "multiply",
                index: 1
            })
        );
        assert_eq!(
            divide(&[i32::MIN, -1]),
            Err(SeqError::ArithmeticOverflow {
                operation: "divide",
                index: 1
            })
        );
        assert_eq!(divide(&[i32::MIN, 2]), Ok(i32::MIN / 2));
        assert_eq!(add(&[i32::MAX, -1, 1]), Ok(i32::MAX));
    }

    #[test]
    fn divide_folds_left() {
        assert_eq!(divide(&[100, 5, 2]), Ok(10));
        assert_eq!(divide(&[7]), Ok(7));
        assert_relative_eq!(divide(&[1.0, 4.0]).unwrap_or(f64::NAN), 0.25);
    }

    #[test]
    fn divide_reports_failures() {
        assert_eq!(divide::<i32>(&[]), Err(SeqError::EmptySequence));
        assert_eq!(
            divide(&[8, 2, 0, 1]),
            Err(SeqError::DivideByZero { index: 2 })
        );
        assert_eq!(
            divide(&[1.0, 0.0]),
            Err(SeqError::DivideByZero { index: 1 })
        );
    }

    #[test]
    fn factorial_values_and_overflow() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(
            factorial(21),
            Err(SeqError::Overflow {
                operation: "factorial",
                input: 21
            })
        );
        assert!(factorial(u64::MAX).is_err());
    }

    #[test]
    fn fib_values() {
        let terms: Vec<u64> = (0..=10).map(fib).collect();
        assert_eq!(terms, vec![1, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }
}

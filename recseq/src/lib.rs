//! Recursive, functional reimplementations of the everyday sequence utilities.
//!
//! Every operation takes its input as a borrowed slice and returns a freshly
//! allocated result, so inputs are never mutated. Operations come in several
//! formulations, kept in separate modules and tested against each other:
//!
//! - [`primitives`]: head/tail decomposition, emptiness, `length`, `reverse`, `copy`
//! - [`direct`]: head/tail recursion, one stack frame per element
//! - [`fold`]: everything expressed through the universal [`reduce`]
//! - [`cata`]: catamorphisms over [`util::ListFrame`], evaluated on the heap
//! - [`nested`]: sequences of sequences and [`flatten`]
//!
//! The crate root re-exports the canonical definition of each operation.
//! Direct recursions can be bounded with [`RecursionConfig`].

pub mod cata;
pub mod combinators;
pub mod config;
pub mod direct;
pub mod error;
pub mod ext;
pub mod fold;
pub mod nested;
pub mod numeric;
pub mod primitives;
pub mod select;
pub mod sort;

// Public Re-exports
pub use combinators::{
    Compose, Endo, F1, Identity, Keyed, Spread, boxed_endo, compose, flip, flow, partial,
    partial2, pluck, pluck_by, reverse_args, spread_arg,
};
pub use config::{DEFAULT_MAX_DEPTH, RecursionConfig};
pub use error::{SeqError, SeqResult};
pub use ext::SeqExt;
pub use fold::{
    filter, length, map, map_indexed, partition, reduce, reduce_right, reject, reverse,
    try_reduce,
};
pub use nested::{Nested, flatten, is_sequence};
pub use numeric::{Extremum, Numeric, add, divide, factorial, fib, max, min, multiply};
pub use primitives::{copy, def, head, is_empty, split_head, tail, undef};
pub use select::{first, last, last_by_index, slice, swap};
pub use sort::{merge, merge_sort, quicksort};

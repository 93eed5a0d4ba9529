//! Frames describing one layer of a recursive structure.
//!
//! A frame holds the data of a single layer with the recursive positions
//! abstracted out as a type parameter. [`recursion::Collapsible::collapse_frames`]
//! then folds a whole structure bottom-up, one frame at a time, using an
//! explicit heap stack so arbitrarily long (or deep) inputs never exhaust the
//! call stack.

pub mod list;
pub mod nested;

pub use ::recursion::{Collapsible, CollapsibleExt, MappableFrame, PartiallyApplied};

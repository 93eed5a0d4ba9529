//! Shared building blocks for the `recseq` crate: recursion-scheme frames for
//! slices and nested sequences, evaluated on the heap by the [`recursion`]
//! crate instead of on the call stack.

pub mod recursion;

// Public Re-exports
pub use crate::recursion::list::{CollapsibleSlice, ListFrame};
pub use crate::recursion::nested::NestedFrame;

pub mod private {
    // sealed traits support
    pub trait Sealed {}
    impl<T: ?Sized> Sealed for T {}
}

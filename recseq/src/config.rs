use crate::error::{SeqError, SeqResult};
use bon::Builder;
use log::{debug, warn};

/// Largest input handed to a direct recursion unless configured otherwise.
///
/// Direct formulations spend one stack frame per element; this keeps them well
/// inside the 2 MiB stacks spawned threads get by default.
pub const DEFAULT_MAX_DEPTH: usize = 2_048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder)]
pub struct RecursionConfig {
    /// Maximum recursion depth a direct (non-accumulator) operation may reach
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Default for RecursionConfig {
    #[inline]
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RecursionConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Checks that a recursion `required` frames deep fits the configured limit.
    ///
    /// # Errors
    /// [`SeqError::DepthExceeded`] when `required > max_depth`.
    #[inline]
    pub fn guard(&self, required: usize) -> SeqResult<()> {
        if required > self.max_depth {
            warn!(
                "refusing a recursion {required} frames deep (limit is {})",
                self.max_depth
            );
            return Err(SeqError::DepthExceeded {
                required,
                limit: self.max_depth,
            });
        }
        debug!("recursion of depth {required} accepted");
        Ok(())
    }

    /// Runs a direct-recursive operation over `seq` once its length has passed
    /// [`RecursionConfig::guard`].
    ///
    /// # Errors
    /// [`SeqError::DepthExceeded`] when `seq` is longer than `max_depth`.
    #[inline]
    pub fn run<'a, T, R>(&self, seq: &'a [T], op: impl FnOnce(&'a [T]) -> R) -> SeqResult<R> {
        self.guard(seq.len())?;
        Ok(op(seq))
    }
}

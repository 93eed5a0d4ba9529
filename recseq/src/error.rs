use thiserror::Error;

/// Every way a sequence operation can fail.
///
/// Operations never degrade silently: where a sequence is too short, an index
/// is out of range, or arithmetic has no answer, the caller gets one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("Cannot take the head of an empty sequence")]
    EmptySequence,

    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Raised before a direct recursion starts, since a real stack overflow
    /// aborts the process instead of unwinding.
    #[error("Recursing over {required} elements exceeds the depth limit of {limit}")]
    DepthExceeded { required: usize, limit: usize },

    #[error("Division by zero at position {index}")]
    DivideByZero { index: usize },

    #[error("`{operation}({input})` overflows")]
    Overflow { operation: &'static str, input: u64 },

    #[error("`{operation}` overflows at position {index}")]
    ArithmeticOverflow { operation: &'static str, index: usize },

    #[error("Key `{key}` is not present")]
    MissingKey { key: String },
}

pub type SeqResult<T> = Result<T, SeqError>;

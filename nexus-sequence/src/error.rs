//! Error type shared by every sequence operation.

use core::fmt;

/// Contract violation reported by a sequence operation.
///
/// Every fallible operation either succeeds completely or returns one of
/// these with the structure left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// Index outside the operation's valid range.
    ///
    /// Lookups, updates and removals accept `[0, len)`; insertion accepts
    /// `[0, len]`.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// First/last/top access on an empty sequence.
    Empty,
    /// Array list constructed with a capacity of zero.
    ZeroCapacity,
    /// Stack push given no element.
    MissingElement,
}

impl SequenceError {
    #[inline]
    pub(crate) const fn out_of_bounds(index: usize, len: usize) -> Self {
        SequenceError::IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            SequenceError::Empty => write!(f, "sequence is empty"),
            SequenceError::ZeroCapacity => write!(f, "capacity cannot be zero"),
            SequenceError::MissingElement => write!(f, "element is required"),
        }
    }
}

impl std::error::Error for SequenceError {}

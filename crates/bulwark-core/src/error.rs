//! Error taxonomy for the Bulwark primitives.
//!
//! Every primitive reports failure to its immediate caller through
//! [`MemError`]. None of them print, abort, or leave a destination in a
//! partially written state.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors returned by the bounded-copy, duplication, allocation, and
/// buffer primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemError {
    /// An input was absent, zero-sized, or otherwise not permitted.
    InvalidArgument {
        /// Which argument was rejected and why.
        reason: &'static str,
    },
    /// A bounded copy could not fit the source plus its terminator.
    ///
    /// The destination is left untouched.
    Truncation {
        /// Length of the source in bytes.
        source_len: usize,
        /// Capacity of the destination in bytes, terminator included.
        capacity: usize,
    },
    /// The underlying allocator could not satisfy a request.
    AllocationFailure {
        /// Number of bytes requested.
        requested: usize,
    },
    /// An owner-mediated write addressed a slot outside the buffer.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The bound the index had to stay below.
        len: usize,
    },
    /// The buffer has not been created or has already been destroyed.
    InvalidHandle,
    /// Reading input for a bounded line failed.
    Io {
        /// The kind of the underlying I/O error.
        kind: io::ErrorKind,
    },
}

impl MemError {
    /// Whether this error reports allocator exhaustion.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}

impl fmt::Display for MemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Truncation {
                source_len,
                capacity,
            } => {
                write!(
                    f,
                    "source of {source_len} bytes does not fit destination of {capacity} bytes"
                )
            }
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed for {requested} bytes")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InvalidHandle => write!(f, "buffer is not live"),
            Self::Io { kind } => write!(f, "read failed: {kind}"),
        }
    }
}

impl Error for MemError {}

impl From<io::Error> for MemError {
    fn from(e: io::Error) -> Self {
        Self::Io { kind: e.kind() }
    }
}

//! C-compatible status codes.

use bulwark_core::MemError;

/// Status returned by every `bulwark_*` function.
///
/// `Ok` is 0 and every failure is negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulwarkStatus {
    /// Success.
    Ok = 0,
    /// A pointer was null, a size was zero, or an argument was otherwise
    /// not permitted.
    InvalidArgument = -1,
    /// The source did not fit the destination; nothing was written.
    Truncation = -2,
    /// Storage could not be obtained.
    AllocationFailed = -3,
    /// An index was outside the array.
    OutOfBounds = -4,
    /// The handle was never issued or has been destroyed.
    InvalidHandle = -5,
    /// A caller-provided output buffer is too small.
    BufferTooSmall = -6,
    /// Internal error, such as a table poisoned by an earlier panic.
    InternalError = -7,
    /// A Rust panic was caught at the boundary.
    Panicked = -128,
}

impl From<&MemError> for BulwarkStatus {
    fn from(e: &MemError) -> Self {
        match e {
            MemError::InvalidArgument { .. } => BulwarkStatus::InvalidArgument,
            MemError::Truncation { .. } => BulwarkStatus::Truncation,
            MemError::AllocationFailure { .. } => BulwarkStatus::AllocationFailed,
            MemError::OutOfBounds { .. } => BulwarkStatus::OutOfBounds,
            MemError::InvalidHandle => BulwarkStatus::InvalidHandle,
            MemError::Io { .. } => BulwarkStatus::InternalError,
        }
    }
}

impl From<Result<(), MemError>> for BulwarkStatus {
    fn from(result: Result<(), MemError>) -> Self {
        match result {
            Ok(()) => BulwarkStatus::Ok,
            Err(e) => BulwarkStatus::from(&e),
        }
    }
}

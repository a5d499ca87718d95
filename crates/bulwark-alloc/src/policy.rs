//! Allocation failure policy.
//!
//! A failed request is a recoverable [`MemError`] unless the caller opts
//! into termination, either allocator-wide through
//! [`FailurePolicy::Terminate`] or at a single call site through
//! [`OrTerminate::or_terminate`]. Only a top-level boundary with no sane
//! recovery path should do either.

use bulwark_core::MemError;

/// Exit status used when an allocation failure terminates the process.
pub const EXIT_ALLOCATION_FAILURE: i32 = 1;

/// Exit status used when [`OrTerminate::or_terminate`] escalates any other
/// error.
pub const EXIT_OTHER_FAILURE: i32 = 2;

/// What a [`CheckedAllocator`](crate::CheckedAllocator) does when a request
/// cannot be satisfied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return [`MemError::AllocationFailure`] to the caller.
    #[default]
    ReturnError,
    /// Print a diagnostic naming the requested size and exit with
    /// [`EXIT_ALLOCATION_FAILURE`].
    ///
    /// Applies to fresh requests only. A failed
    /// [`resize`](crate::CheckedAllocator::resize) is always returned.
    Terminate,
}

/// Diagnostic written to stderr before terminating.
pub fn diagnostic(requested: usize) -> String {
    format!("bulwark: allocation failed for {requested} bytes")
}

/// Report an allocation failure and exit the process.
pub fn terminate(requested: usize) -> ! {
    let message = diagnostic(requested);
    log::error!("{message}");
    eprintln!("{message}");
    std::process::exit(EXIT_ALLOCATION_FAILURE)
}

/// Escalate a failed result to process termination at the call site.
pub trait OrTerminate<T> {
    /// Unwrap the value, or print a diagnostic and exit.
    ///
    /// Allocation failures exit with [`EXIT_ALLOCATION_FAILURE`], every
    /// other error with [`EXIT_OTHER_FAILURE`].
    fn or_terminate(self) -> T;
}

impl<T> OrTerminate<T> for Result<T, MemError> {
    fn or_terminate(self) -> T {
        match self {
            Ok(value) => value,
            Err(MemError::AllocationFailure { requested }) => terminate(requested),
            Err(e) => {
                log::error!("bulwark: {e}");
                eprintln!("bulwark: {e}");
                std::process::exit(EXIT_OTHER_FAILURE)
            }
        }
    }
}

//! Allocator configuration parameters.

use std::error::Error;
use std::fmt;

use crate::policy::FailurePolicy;

/// Configuration for a [`CheckedAllocator`](crate::CheckedAllocator).
///
/// Controls the per-request size ceiling and what happens when a request
/// cannot be satisfied. Validated at allocator construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocConfig {
    /// Largest single request, in bytes, the allocator will attempt.
    ///
    /// Requests above this are reported as allocation failures without
    /// touching the system allocator. Default: `isize::MAX`, the largest
    /// size any Rust allocation may have. Must not exceed that default.
    pub max_request_bytes: usize,

    /// What to do when a request fails.
    ///
    /// Default: [`FailurePolicy::ReturnError`].
    pub on_failure: FailurePolicy,
}

impl AllocConfig {
    /// Default request ceiling: the largest valid allocation size.
    pub const DEFAULT_MAX_REQUEST_BYTES: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_request_bytes: Self::DEFAULT_MAX_REQUEST_BYTES,
            on_failure: FailurePolicy::ReturnError,
        }
    }

    /// Create a config that rejects any request above `max_request_bytes`.
    pub fn with_limit(max_request_bytes: usize) -> Self {
        Self {
            max_request_bytes,
            ..Self::new()
        }
    }

    /// Check the config for values no allocator can honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_request_bytes > Self::DEFAULT_MAX_REQUEST_BYTES {
            return Err(ConfigError::RequestLimitTooLarge {
                configured: self.max_request_bytes,
                maximum: Self::DEFAULT_MAX_REQUEST_BYTES,
            });
        }
        Ok(())
    }
}

impl Default for AllocConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected while validating an [`AllocConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_request_bytes` is above the largest valid allocation size.
    RequestLimitTooLarge {
        /// The configured ceiling.
        configured: usize,
        /// The largest ceiling accepted.
        maximum: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestLimitTooLarge {
                configured,
                maximum,
            } => {
                write!(
                    f,
                    "max_request_bytes {configured} exceeds the maximum of {maximum}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

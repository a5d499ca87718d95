//! The checked allocator.
//!
//! Wraps the fixed-size, zeroed, and resize primitives so a caller never
//! receives an unchecked failure. Every request is first compared against
//! [`AllocConfig::max_request_bytes`], then reserved with
//! `Vec::try_reserve_exact`, which reports exhaustion instead of aborting.

use bulwark_core::MemError;

use crate::config::{AllocConfig, ConfigError};
use crate::memory::{bytes_for, Element, Memory};
use crate::policy::{self, FailurePolicy};

/// Allocation wrappers that report failure instead of invoking undefined
/// behaviour or aborting.
///
/// Cheap to clone; holds only its configuration.
#[derive(Clone, Debug, Default)]
pub struct CheckedAllocator {
    config: AllocConfig,
}

impl CheckedAllocator {
    /// Create an allocator from a validated config.
    pub fn new(config: AllocConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Replace the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.on_failure = policy;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AllocConfig {
        &self.config
    }

    /// The active failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.config.on_failure
    }

    /// Request `size` bytes.
    ///
    /// Callers must not rely on the contents of the returned block.
    /// `size == 0` yields an empty block.
    pub fn allocate(&self, size: usize) -> Result<Memory<u8>, MemError> {
        self.settle(self.reserve::<u8>(size))
    }

    /// Request `count * element_size` bytes, all zero.
    ///
    /// A zero `count` or `element_size` yields an empty block. A product
    /// that overflows `usize` is an allocation failure.
    pub fn allocate_zeroed(
        &self,
        count: usize,
        element_size: usize,
    ) -> Result<Memory<u8>, MemError> {
        let bytes = count.saturating_mul(element_size);
        self.settle(self.reserve::<u8>(bytes))
    }

    /// Request `count` zeroed elements of `T`.
    pub fn allocate_array<T: Element>(&self, count: usize) -> Result<Memory<T>, MemError> {
        self.settle(self.reserve::<T>(count))
    }

    /// Grow or shrink `memory` to `new_len` elements.
    ///
    /// The overlapping prefix is preserved and any new tail is zeroed. On
    /// failure `memory` is left exactly as it was; the caller decides
    /// whether to keep or drop it.
    ///
    /// A failed resize is always returned, even under
    /// [`FailurePolicy::Terminate`], since the caller still owns a valid
    /// block. Use [`OrTerminate`](crate::OrTerminate) to escalate it.
    pub fn resize<T: Element>(
        &self,
        memory: &mut Memory<T>,
        new_len: usize,
    ) -> Result<(), MemError> {
        self.resize_in_place(memory, new_len)
    }

    fn reserve<T: Element>(&self, count: usize) -> Result<Memory<T>, MemError> {
        let requested = bytes_for::<T>(count);
        self.admit(requested)?;
        let mut data = Vec::new();
        data.try_reserve_exact(count).map_err(|_| self.failed(requested))?;
        data.resize(count, T::ZERO);
        log::trace!("allocated {requested} bytes");
        Ok(Memory::from_vec(data))
    }

    fn resize_in_place<T: Element>(
        &self,
        memory: &mut Memory<T>,
        new_len: usize,
    ) -> Result<(), MemError> {
        let current = memory.len();
        let data = memory.vec_mut();
        if new_len <= current {
            data.truncate(new_len);
            data.shrink_to_fit();
            return Ok(());
        }
        let requested = bytes_for::<T>(new_len);
        self.admit(requested)?;
        // try_reserve_exact leaves the vec untouched when it fails.
        data.try_reserve_exact(new_len - current)
            .map_err(|_| self.failed(requested))?;
        data.resize(new_len, T::ZERO);
        log::trace!("resized block to {requested} bytes");
        Ok(())
    }

    fn admit(&self, requested: usize) -> Result<(), MemError> {
        if requested > self.config.max_request_bytes {
            return Err(self.failed(requested));
        }
        Ok(())
    }

    fn failed(&self, requested: usize) -> MemError {
        log::debug!(
            "allocation of {requested} bytes refused (ceiling {} bytes)",
            self.config.max_request_bytes
        );
        MemError::AllocationFailure { requested }
    }

    fn settle<T>(&self, result: Result<T, MemError>) -> Result<T, MemError> {
        match (result, self.config.on_failure) {
            (Err(MemError::AllocationFailure { requested }), FailurePolicy::Terminate) => {
                policy::terminate(requested)
            }
            (result, _) => result,
        }
    }
}

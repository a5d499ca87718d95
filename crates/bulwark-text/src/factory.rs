//! Owned-string duplication.
//!
//! [`OwnedStringFactory::duplicate`] copies a byte sequence into storage
//! obtained from a [`CheckedAllocator`]. The result is an [`OwnedString`]
//! with a single owner; moving it moves the duty to release it, and it
//! cannot be cloned into a second releaser.

use std::ffi::CStr;
use std::fmt;
use std::str::Utf8Error;

use bulwark_alloc::{CheckedAllocator, Memory};
use bulwark_core::MemError;

use crate::bounded::write_terminated;

/// An exclusively owned, NUL-terminated byte string.
///
/// Storage is exactly `len() + 1` bytes. The terminator is maintained by
/// the type and is not reachable through [`as_bytes_mut`](Self::as_bytes_mut).
pub struct OwnedString {
    storage: Memory<u8>,
}

impl OwnedString {
    /// Number of content bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.storage.len() - 1
    }

    /// Whether the string has no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.storage.as_slice()[..len]
    }

    /// Mutable content bytes, terminator excluded.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.storage.as_mut_slice()[..len]
    }

    /// Content bytes followed by the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.storage.as_slice()
    }

    /// The content as UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The content as a C string.
    ///
    /// Returns `None` if the content contains an interior NUL byte.
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).ok()
    }

    /// Storage size in bytes, terminator included.
    pub fn allocated_bytes(&self) -> usize {
        self.storage.byte_len()
    }
}

impl fmt::Debug for OwnedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedString")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Duplicates byte sequences into independently owned storage.
#[derive(Clone, Debug, Default)]
pub struct OwnedStringFactory {
    allocator: CheckedAllocator,
}

impl OwnedStringFactory {
    /// Create a factory drawing storage from `allocator`.
    pub fn new(allocator: CheckedAllocator) -> Self {
        Self { allocator }
    }

    /// The allocator backing this factory.
    pub fn allocator(&self) -> &CheckedAllocator {
        &self.allocator
    }

    /// Duplicate `source` into a fresh [`OwnedString`].
    ///
    /// An empty source is valid and yields an empty string.
    ///
    /// # Errors
    ///
    /// - [`MemError::InvalidArgument`] if `source` is absent.
    /// - [`MemError::AllocationFailure`] if `source.len() + 1` bytes cannot
    ///   be obtained.
    pub fn duplicate(&self, source: Option<&[u8]>) -> Result<OwnedString, MemError> {
        let source = source.ok_or(MemError::InvalidArgument {
            reason: "source is absent",
        })?;
        let size = source
            .len()
            .checked_add(1)
            .ok_or(MemError::AllocationFailure {
                requested: usize::MAX,
            })?;
        let mut storage = self.allocator.allocate(size)?;
        write_terminated(storage.as_mut_slice(), 0, source);
        Ok(OwnedString { storage })
    }

    /// Duplicate a Rust string slice.
    pub fn duplicate_str(&self, source: &str) -> Result<OwnedString, MemError> {
        self.duplicate(Some(source.as_bytes()))
    }
}

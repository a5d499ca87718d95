//! The owned dynamic buffer.
//!
//! An [`OwnedBuffer`] owns `capacity` zero-initialised slots obtained from a
//! [`CheckedAllocator`], of which the first `size` are logically valid.
//! Growth is never implicit: a write past `capacity` is refused and the
//! owner must call [`OwnedBuffer::resize_capacity`].
//!
//! Release is explicit through [`OwnedBuffer::destroy`], which is
//! idempotent. Dropping a live buffer releases its storage as well, so a
//! forgotten `destroy` is never a leak.

use std::fmt;

use bulwark_alloc::{CheckedAllocator, Element, Memory};
use bulwark_core::MemError;

use crate::state::BufferState;

/// A growable, exclusively owned sequence of elements with an explicit
/// lifecycle.
///
/// Invariants: `size <= capacity`; storage is present if and only if the
/// state is [`BufferState::Live`].
pub struct OwnedBuffer<T: Element = i32> {
    state: BufferState,
    storage: Option<Memory<T>>,
    size: usize,
}

impl<T: Element> OwnedBuffer<T> {
    /// Allocate zeroed storage for `initial_capacity` elements.
    ///
    /// The buffer starts Live with `size == 0`. Allocation failure follows
    /// `allocator`'s [`FailurePolicy`](bulwark_alloc::FailurePolicy).
    pub fn create(
        initial_capacity: usize,
        allocator: &CheckedAllocator,
    ) -> Result<Self, MemError> {
        let storage = allocator.allocate_array::<T>(initial_capacity)?;
        log::trace!("buffer created with capacity {initial_capacity}");
        Ok(Self {
            state: BufferState::Live,
            storage: Some(storage),
            size: 0,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Whether the buffer owns storage.
    pub fn is_live(&self) -> bool {
        self.state.is_live()
    }

    /// Number of logically valid elements. Zero unless Live.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots. Zero unless Live.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, Memory::len)
    }

    /// The logically valid elements, or `None` unless Live.
    pub fn as_slice(&self) -> Option<&[T]> {
        self.storage.as_ref().map(|s| &s.as_slice()[..self.size])
    }

    /// Every allocated slot, valid or not, or `None` unless Live.
    pub fn storage(&self) -> Option<&[T]> {
        self.storage.as_ref().map(Memory::as_slice)
    }

    /// Mutable view of every allocated slot, or `None` unless Live.
    ///
    /// Writing a slot does not change `size`; use
    /// [`set_size`](Self::set_size) to publish it.
    pub fn storage_mut(&mut self) -> Option<&mut [T]> {
        self.storage.as_mut().map(Memory::as_mut_slice)
    }

    /// The element at `index` if it is below `size`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice()?.get(index).copied()
    }

    /// Write `value` into slot `index`, which must be below `capacity`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), MemError> {
        let storage = self.storage.as_mut().ok_or(MemError::InvalidHandle)?;
        let len = storage.len();
        let slot = storage
            .as_mut_slice()
            .get_mut(index)
            .ok_or(MemError::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Declare the first `size` slots valid. `size` must not exceed
    /// `capacity`.
    pub fn set_size(&mut self, size: usize) -> Result<(), MemError> {
        let capacity = self
            .storage
            .as_ref()
            .ok_or(MemError::InvalidHandle)?
            .len();
        if size > capacity {
            return Err(MemError::OutOfBounds {
                index: size,
                len: capacity,
            });
        }
        self.size = size;
        Ok(())
    }

    /// Append `value` if a free slot remains.
    ///
    /// Does not grow: a full buffer returns [`MemError::OutOfBounds`].
    pub fn push(&mut self, value: T) -> Result<(), MemError> {
        let storage = self.storage.as_mut().ok_or(MemError::InvalidHandle)?;
        let capacity = storage.len();
        if self.size == capacity {
            return Err(MemError::OutOfBounds {
                index: self.size,
                len: capacity,
            });
        }
        storage.as_mut_slice()[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Grow or shrink storage to `new_capacity` slots.
    ///
    /// Existing elements up to `min(size, new_capacity)` are kept and
    /// `size` is clamped. On failure the buffer is unchanged.
    pub fn resize_capacity(
        &mut self,
        new_capacity: usize,
        allocator: &CheckedAllocator,
    ) -> Result<(), MemError> {
        let storage = self.storage.as_mut().ok_or(MemError::InvalidHandle)?;
        allocator.resize(storage, new_capacity)?;
        self.size = self.size.min(new_capacity);
        Ok(())
    }

    /// Release storage and move to [`BufferState::Destroyed`].
    ///
    /// Returns `true` if this call released storage. Calling it again, or
    /// on a buffer that was never created, is a no-op returning `false`.
    pub fn destroy(&mut self) -> bool {
        match self.storage.take() {
            Some(storage) => {
                log::trace!("buffer destroyed, releasing {} bytes", storage.byte_len());
                drop(storage);
                self.size = 0;
                self.state = BufferState::Destroyed;
                true
            }
            None => {
                log::debug!("destroy on {} buffer ignored", self.state);
                false
            }
        }
    }
}

impl<T: Element> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self {
            state: BufferState::Uninitialized,
            storage: None,
            size: 0,
        }
    }
}

impl<T: Element> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("state", &self.state)
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

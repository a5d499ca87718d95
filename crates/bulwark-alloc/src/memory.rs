//! Owned memory blocks.
//!
//! A [`Memory`] is a contiguous block of plain elements handed out by the
//! [`CheckedAllocator`](crate::CheckedAllocator). It has exactly one owner,
//! is not `Clone`, and is released when dropped.

use std::fmt;

/// Plain element types a [`Memory`] block can hold.
///
/// Every element type has an all-zero value, used to fill fresh storage.
pub trait Element: Copy + PartialEq + fmt::Debug + 'static {
    /// The all-zero value of this type.
    const ZERO: Self;
}

macro_rules! impl_element {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element!(
    u8 => 0,
    i8 => 0,
    u16 => 0,
    i16 => 0,
    u32 => 0,
    i32 => 0,
    u64 => 0,
    i64 => 0,
    usize => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Number of bytes occupied by `count` elements of `T`, saturating.
///
/// Saturation makes an overflowing request larger than any permitted
/// ceiling, so it is rejected like any other oversized request.
pub(crate) fn bytes_for<T: Element>(count: usize) -> usize {
    count.saturating_mul(std::mem::size_of::<T>())
}

/// An exclusively owned block of `len` elements.
///
/// Storage is fully initialised. Blocks obtained from
/// [`CheckedAllocator::allocate`](crate::CheckedAllocator::allocate) carry
/// no guarantee about their contents; all other constructors zero them.
pub struct Memory<T: Element = u8> {
    data: Vec<T>,
}

impl<T: Element> Memory<T> {
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// A zero-length block. Owns no heap storage.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of elements in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this is a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Size of the block in bytes.
    pub fn byte_len(&self) -> usize {
        bytes_for::<T>(self.data.len())
    }

    /// Shared view of the whole block.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the whole block.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }
}

impl<T: Element> Default for Memory<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> fmt::Debug for Memory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.data.len())
            .field("bytes", &self.byte_len())
            .finish()
    }
}

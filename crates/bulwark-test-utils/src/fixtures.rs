//! Reusable inputs and allocators.
//!
//! - [`tight_allocator`]: a [`CheckedAllocator`] that refuses any request
//!   above a few bytes.
//! - [`poisoned`]: a destination pre-filled with [`GARBAGE`].
//! - [`LONG_SOURCE`] / [`GREETING`]: the overflow and duplication samples.

use bulwark_alloc::{AllocConfig, CheckedAllocator};

/// A source too long for a ten-byte destination.
pub const LONG_SOURCE: &[u8] = b"This is a very long string that will overflow";

/// The short sample used for duplication scenarios.
pub const GREETING: &[u8] = b"Hello";

/// Fill byte for destinations that stand in for uninitialised memory.
pub const GARBAGE: u8 = 0xA5;

/// An allocator that fails every request larger than `max_request_bytes`.
///
/// # Panics
///
/// Panics if `max_request_bytes` exceeds `isize::MAX`.
pub fn tight_allocator(max_request_bytes: usize) -> CheckedAllocator {
    CheckedAllocator::new(AllocConfig::with_limit(max_request_bytes))
        .expect("ceiling within isize::MAX")
}

/// A destination of `len` bytes, every one set to [`GARBAGE`].
pub fn poisoned(len: usize) -> Vec<u8> {
    vec![GARBAGE; len]
}

/// `0, 1, .., n - 1` as `i32`.
pub fn counting_sequence(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

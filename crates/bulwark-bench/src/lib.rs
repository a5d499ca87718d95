//! Benchmark inputs for the Bulwark primitives.
//!
//! - [`text_of_len`]: printable, NUL-free text of a given length
//! - [`unbounded_allocator`]: allocator with the default request ceiling
//! - [`TEXT_SIZES`]: source lengths swept by the string benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bulwark_alloc::{AllocConfig, CheckedAllocator};

/// Source lengths, in bytes, swept by the copy and duplicate benchmarks.
pub const TEXT_SIZES: [usize; 4] = [16, 256, 4096, 65536];

/// Deterministic printable text of exactly `len` bytes, with no NUL.
pub fn text_of_len(len: usize) -> Vec<u8> {
    (0..len).map(|i| b'a' + (i % 26) as u8).collect()
}

/// An allocator that only refuses what the platform refuses.
pub fn unbounded_allocator() -> CheckedAllocator {
    CheckedAllocator::new(AllocConfig::new()).unwrap_or_default()
}

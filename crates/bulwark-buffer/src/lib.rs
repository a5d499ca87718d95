//! Owned dynamic buffers for Bulwark.
//!
//! [`OwnedBuffer`] is a growable sequence of integers (or any
//! [`Element`](bulwark_alloc::Element)) built on
//! [`CheckedAllocator`](bulwark_alloc::CheckedAllocator). Its handle carries
//! a runtime-checked [`BufferState`], so reading a destroyed buffer yields
//! `None` and destroying it twice is a no-op.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod state;

pub use buffer::OwnedBuffer;
pub use state::BufferState;

//! Test utilities and fixtures for Bulwark development.
//!
//! Provides allocators with small request ceilings (so exhaustion can be
//! provoked deterministically), garbage-filled destinations standing in
//! for uninitialised stack buffers, and the canonical sample inputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    counting_sequence, poisoned, tight_allocator, GARBAGE, GREETING, LONG_SOURCE,
};

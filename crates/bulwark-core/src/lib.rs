//! Core types for the Bulwark memory primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy every other Bulwark crate reports through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::MemError;

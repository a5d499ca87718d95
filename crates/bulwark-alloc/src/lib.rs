//! Checked allocation wrappers for Bulwark.
//!
//! Every allocation in the workspace goes through a [`CheckedAllocator`].
//! A request that cannot be satisfied comes back as
//! [`MemError::AllocationFailure`](bulwark_core::MemError::AllocationFailure)
//! naming the requested size; whether that error is returned or ends the
//! process is chosen by the caller through [`FailurePolicy`].
//!
//! # Architecture
//!
//! ```text
//! CheckedAllocator
//! ├── AllocConfig (request ceiling + FailurePolicy, validated)
//! ├── allocate / allocate_zeroed / allocate_array → Memory<T>
//! └── resize(&mut Memory<T>): input untouched on failure
//! ```
//!
//! # Safety
//!
//! All storage is a zero-initialised `Vec<T>` reserved with
//! `try_reserve_exact`. No `MaybeUninit`, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod memory;
pub mod policy;

// Public re-exports for the primary API surface.
pub use allocator::CheckedAllocator;
pub use config::{AllocConfig, ConfigError};
pub use memory::{Element, Memory};
pub use policy::{FailurePolicy, OrTerminate};

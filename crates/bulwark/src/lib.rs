//! Bulwark: memory and string primitives that refuse to overflow.
//!
//! This is the facade crate that re-exports the public API of every
//! Bulwark sub-crate. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! // Bounded copy: fits, or refuses without writing.
//! let mut name = [0u8; 10];
//! assert_eq!(copy(&mut name, Some(b"Hello".as_slice())), Ok(5));
//! assert!(matches!(
//!     copy(&mut name, Some(b"far too long for ten".as_slice())),
//!     Err(MemError::Truncation { .. })
//! ));
//!
//! // Owned duplicate, released when dropped.
//! let factory = OwnedStringFactory::default();
//! let owned = factory.duplicate_str("Hello").unwrap();
//! assert_eq!(owned.as_bytes_with_nul(), b"Hello\0");
//!
//! // Owned buffer with explicit growth and idempotent destroy.
//! let allocator = CheckedAllocator::default();
//! let mut buf: OwnedBuffer = OwnedBuffer::create(2, &allocator).unwrap();
//! buf.push(1).unwrap();
//! buf.push(2).unwrap();
//! assert!(buf.push(3).is_err());
//! buf.resize_capacity(4, &allocator).unwrap();
//! buf.push(3).unwrap();
//! assert!(buf.destroy());
//! assert!(!buf.destroy());
//! assert_eq!(buf.get(0), None);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `bulwark-core` | [`MemError`](types::MemError) |
//! | [`alloc`] | `bulwark-alloc` | Checked allocator, failure policy, `Memory` |
//! | [`text`] | `bulwark-text` | Bounded copy and append, line input, owned strings |
//! | [`buffer`] | `bulwark-buffer` | Owned dynamic buffer and its lifecycle |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared error type (`bulwark-core`).
pub use bulwark_core as types;

/// Checked allocation (`bulwark-alloc`).
///
/// [`alloc::CheckedAllocator`] never returns unchecked storage. Whether a
/// failure is returned or ends the process is chosen per allocator with
/// [`alloc::FailurePolicy`], or per call site with
/// [`alloc::OrTerminate::or_terminate`].
pub use bulwark_alloc as alloc;

/// Bounded string operations and owned strings (`bulwark-text`).
pub use bulwark_text as text;

/// Owned dynamic buffers (`bulwark-buffer`).
pub use bulwark_buffer as buffer;

/// Common imports for typical Bulwark usage.
///
/// ```rust
/// use bulwark::prelude::*;
/// ```
pub mod prelude {
    // Errors
    pub use bulwark_core::MemError;

    // Allocation
    pub use bulwark_alloc::{AllocConfig, CheckedAllocator, FailurePolicy, Memory, OrTerminate};

    // Strings
    pub use bulwark_text::{
        append, copy, read_line, terminated_len, OwnedString, OwnedStringFactory,
    };

    // Buffers
    pub use bulwark_buffer::{BufferState, OwnedBuffer};
}

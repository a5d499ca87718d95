//! Bounds-checked string primitives for Bulwark.
//!
//! - [`bounded`]: copy and append into a caller-supplied fixed-capacity
//!   destination, refusing truncation instead of overflowing or silently
//!   shortening.
//! - [`line`]: read one line into a fixed-capacity destination.
//! - [`factory`]: duplicate a byte sequence into an independently owned,
//!   NUL-terminated [`OwnedString`].
//!
//! Destinations are `&mut [u8]`; their length is the capacity and includes
//! the terminator. Sources are `Option<&[u8]>` so an absent source is
//! distinguishable from an empty one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod factory;
pub mod line;

pub use bounded::{append, copy, terminated_len};
pub use factory::{OwnedString, OwnedStringFactory};
pub use line::read_line;

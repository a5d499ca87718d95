//! Bounded line input.
//!
//! [`read_line`] is the size-limited replacement for reading a word into a
//! fixed array with no limit: it never writes past the destination and
//! never hands back a silently shortened line.

use std::io::{BufRead, ErrorKind};

use bulwark_core::MemError;

use crate::bounded::write_terminated;

/// Read one line from `reader` into `destination`.
///
/// The trailing `\n` (and a `\r` before it) is stripped and the content is
/// NUL-terminated. Returns `Ok(Some(len))` with the content length, or
/// `Ok(None)` when the reader is already at end of input.
///
/// # Errors
///
/// - [`MemError::InvalidArgument`] if `destination` is empty.
/// - [`MemError::Truncation`] if the line does not fit. The line is still
///   consumed from `reader`, so the next call starts on the following
///   line; `destination` is untouched. Memory use is bounded by the
///   destination, not by the line.
/// - [`MemError::Io`] if reading fails.
pub fn read_line<R: BufRead + ?Sized>(
    reader: &mut R,
    destination: &mut [u8],
) -> Result<Option<usize>, MemError> {
    if destination.is_empty() {
        return Err(MemError::InvalidArgument {
            reason: "destination capacity is zero",
        });
    }
    let capacity = destination.len();

    // At most `capacity` bytes are staged; the rest of an over-long line is
    // only counted and skipped.
    let mut staged = Vec::with_capacity(capacity);
    let mut seen = 0usize;
    let mut last = None;
    let mut newline = false;
    let mut at_eof = true;
    while !newline {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if available.is_empty() {
            break;
        }
        at_eof = false;
        let body = match available.iter().position(|&b| b == b'\n') {
            Some(end) => {
                newline = true;
                &available[..end]
            }
            None => available,
        };
        let room = capacity - staged.len();
        staged.extend_from_slice(&body[..body.len().min(room)]);
        if let Some(&b) = body.last() {
            last = Some(b);
        }
        seen = seen.saturating_add(body.len());
        let used = body.len() + usize::from(newline);
        reader.consume(used);
    }
    if at_eof {
        return Ok(None);
    }

    let len = if newline && last == Some(b'\r') {
        seen - 1
    } else {
        seen
    };
    if len >= capacity {
        return Err(MemError::Truncation {
            source_len: len,
            capacity,
        });
    }
    // len < capacity, so the whole line was staged.
    write_terminated(destination, 0, &staged[..len]);
    Ok(Some(len))
}

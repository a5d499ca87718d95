//! Bounds-checked copy and append into caller-supplied destinations.
//!
//! The destination's capacity is its slice length and includes room for a
//! NUL terminator. A source that does not fit is refused with
//! [`MemError::Truncation`] before any byte is written, so the destination
//! is never left holding a silently shortened string.

use bulwark_core::MemError;

/// Length of the NUL-terminated content at the start of `buf`.
///
/// Returns `buf.len()` if `buf` holds no terminator.
pub fn terminated_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// Copy `source` into `destination` and terminate it.
///
/// Returns the number of content bytes written (`source.len()`).
///
/// # Errors
///
/// - [`MemError::InvalidArgument`] if `destination` is empty or `source`
///   is absent.
/// - [`MemError::Truncation`] if `source.len() >= destination.len()`.
///   Nothing is written.
pub fn copy(destination: &mut [u8], source: Option<&[u8]>) -> Result<usize, MemError> {
    let (capacity, source) = check_arguments(destination, source)?;
    if source.len() >= capacity {
        return Err(MemError::Truncation {
            source_len: source.len(),
            capacity,
        });
    }
    write_terminated(destination, 0, source);
    Ok(source.len())
}

/// Append `source` to the terminated content already in `destination`.
///
/// Returns the length of the combined content.
///
/// # Errors
///
/// - [`MemError::InvalidArgument`] if `destination` is empty, `source` is
///   absent, or `destination` holds no terminator.
/// - [`MemError::Truncation`] if the combined content plus terminator does
///   not fit. Nothing is written.
pub fn append(destination: &mut [u8], source: Option<&[u8]>) -> Result<usize, MemError> {
    let (capacity, source) = check_arguments(destination, source)?;
    let existing = terminated_len(destination);
    if existing == capacity {
        return Err(MemError::InvalidArgument {
            reason: "destination is not terminated",
        });
    }
    let combined = existing.saturating_add(source.len());
    if combined >= capacity {
        return Err(MemError::Truncation {
            source_len: combined,
            capacity,
        });
    }
    write_terminated(destination, existing, source);
    Ok(combined)
}

fn check_arguments<'a>(
    destination: &[u8],
    source: Option<&'a [u8]>,
) -> Result<(usize, &'a [u8]), MemError> {
    if destination.is_empty() {
        return Err(MemError::InvalidArgument {
            reason: "destination capacity is zero",
        });
    }
    let source = source.ok_or(MemError::InvalidArgument {
        reason: "source is absent",
    })?;
    Ok((destination.len(), source))
}

/// Caller guarantees `at + source.len() < destination.len()`.
pub(crate) fn write_terminated(destination: &mut [u8], at: usize, source: &[u8]) {
    let end = at + source.len();
    destination[at..end].copy_from_slice(source);
    destination[end] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &[u8] = b"This is a very long string that will overflow";

    fn src(bytes: &[u8]) -> Option<&[u8]> {
        Some(bytes)
    }

    #[test]
    fn copy_fits_and_terminates() {
        let mut dest = [0xAAu8; 10];
        assert_eq!(copy(&mut dest, src(b"Hello")), Ok(5));
        assert_eq!(&dest[..6], b"Hello\0");
        assert_eq!(terminated_len(&dest), 5);
    }

    #[test]
    fn copy_does_not_rely_on_zeroed_destination() {
        let mut dest = [b'x'; 4];
        copy(&mut dest, src(b"ab")).unwrap();
        assert_eq!(terminated_len(&dest), 2);
    }

    #[test]
    fn copy_long_source_is_truncation() {
        let mut dest = [0u8; 10];
        assert_eq!(
            copy(&mut dest, src(LONG)),
            Err(MemError::Truncation {
                source_len: LONG.len(),
                capacity: 10
            })
        );
        assert_eq!(dest, [0u8; 10]);
    }

    #[test]
    fn copy_exact_capacity_is_truncation() {
        // Nine bytes plus a terminator fit in ten; ten bytes do not.
        let mut dest = [0u8; 10];
        assert!(copy(&mut dest, src(b"123456789")).is_ok());
        assert!(matches!(
            copy(&mut dest, src(b"1234567890")),
            Err(MemError::Truncation { .. })
        ));
    }

    #[test]
    fn copy_rejects_zero_capacity() {
        let mut dest: [u8; 0] = [];
        assert!(matches!(
            copy(&mut dest, src(b"")),
            Err(MemError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn copy_rejects_absent_source() {
        let mut dest = [7u8; 4];
        assert_eq!(
            copy(&mut dest, None),
            Err(MemError::InvalidArgument {
                reason: "source is absent"
            })
        );
        assert_eq!(dest, [7u8; 4]);
    }

    #[test]
    fn copy_empty_source_writes_terminator() {
        let mut dest = [b'z'; 3];
        assert_eq!(copy(&mut dest, src(b"")), Ok(0));
        assert_eq!(dest[0], 0);
    }

    #[test]
    fn append_to_zeroed_buffer() {
        let mut dest = [0u8; 50];
        assert_eq!(append(&mut dest, src(b"World")), Ok(5));
        assert_eq!(&dest[..6], b"World\0");
    }

    #[test]
    fn append_extends_existing_content() {
        let mut dest = [0u8; 12];
        copy(&mut dest, src(b"Hello")).unwrap();
        assert_eq!(append(&mut dest, src(b", you")), Ok(10));
        assert_eq!(&dest[..11], b"Hello, you\0");
    }

    #[test]
    fn append_overflow_is_truncation_and_untouched() {
        let mut dest = [0u8; 8];
        copy(&mut dest, src(b"Hello")).unwrap();
        let before = dest;
        assert!(matches!(
            append(&mut dest, src(b"World")),
            Err(MemError::Truncation { .. })
        ));
        assert_eq!(dest, before);
    }

    #[test]
    fn append_rejects_unterminated_destination() {
        let mut dest = [b'x'; 4];
        assert_eq!(
            append(&mut dest, src(b"a")),
            Err(MemError::InvalidArgument {
                reason: "destination is not terminated"
            })
        );
    }

    #[test]
    fn terminated_len_without_nul_is_full_length() {
        assert_eq!(terminated_len(b"abc"), 3);
        assert_eq!(terminated_len(b"a\0c"), 1);
        assert_eq!(terminated_len(b""), 0);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn copy_within_capacity_round_trips(
                source in proptest::collection::vec(1u8..=255, 0..64),
                slack in 1usize..16,
            ) {
                let mut dest = vec![0xFFu8; source.len() + slack];
                prop_assert_eq!(copy(&mut dest, src(&source)), Ok(source.len()));
                prop_assert_eq!(&dest[..source.len()], &source[..]);
                prop_assert_eq!(dest[source.len()], 0);
            }

            #[test]
            fn copy_over_capacity_writes_nothing(
                source in proptest::collection::vec(any::<u8>(), 1..64),
                shortfall in 0usize..64,
            ) {
                let capacity = source.len().saturating_sub(shortfall).max(1);
                let mut dest = vec![0x5Au8; capacity];
                let is_truncation = matches!(
                    copy(&mut dest, src(&source)),
                    Err(MemError::Truncation { .. })
                );
                prop_assert!(is_truncation);
                prop_assert!(dest.iter().all(|&b| b == 0x5A));
            }
        }
    }
}

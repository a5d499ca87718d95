//! Integration test: the C entry points agree with the Rust primitives.
//!
//! Drives the `extern "C"` functions the way a C caller would, with raw
//! `char` buffers and `u64` handles, and checks each result against the
//! safe API it wraps.

use std::ffi::{c_char, CString};
use std::ptr;

use bulwark_ffi::array::{
    bulwark_array_create, bulwark_array_destroy, bulwark_array_get, bulwark_array_push,
    bulwark_array_reserve, bulwark_array_size,
};
use bulwark_ffi::text::{
    bulwark_bounded_copy, bulwark_string_destroy, bulwark_string_duplicate, bulwark_string_len,
    bulwark_string_read,
};
use bulwark_ffi::BulwarkStatus;
use bulwark_test_utils::{counting_sequence, GARBAGE, GREETING, LONG_SOURCE};

const OK: i32 = BulwarkStatus::Ok as i32;

fn as_bytes(buf: &[c_char]) -> Vec<u8> {
    buf.iter().map(|&c| c as u8).collect()
}

// ── Strings ─────────────────────────────────────────────────────────

#[test]
fn long_source_is_refused_through_the_abi() {
    let src = CString::new(LONG_SOURCE).unwrap();
    let mut dest = vec![GARBAGE as c_char; 10];
    assert_eq!(
        bulwark_bounded_copy(dest.as_mut_ptr(), 10, src.as_ptr(), ptr::null_mut()),
        BulwarkStatus::Truncation as i32
    );
    assert!(as_bytes(&dest).iter().all(|&b| b == GARBAGE));
}

#[test]
fn duplicate_then_use_after_destroy() {
    let src = CString::new(GREETING).unwrap();
    let mut h = 0u64;
    assert_eq!(bulwark_string_duplicate(src.as_ptr(), &mut h), OK);

    let mut buf = vec![0 as c_char; 16];
    assert_eq!(bulwark_string_read(h, buf.as_mut_ptr(), 16, ptr::null_mut()), OK);
    assert_eq!(&as_bytes(&buf)[..GREETING.len() + 1], b"Hello\0");

    assert_eq!(bulwark_string_destroy(h), OK);
    let mut len = 0usize;
    assert_eq!(
        bulwark_string_len(h, &mut len),
        BulwarkStatus::InvalidHandle as i32
    );
    assert_eq!(
        bulwark_string_read(h, buf.as_mut_ptr(), 16, ptr::null_mut()),
        BulwarkStatus::InvalidHandle as i32
    );
}

#[test]
fn stale_handle_never_reaches_a_newer_string() {
    let first = CString::new("first").unwrap();
    let second = CString::new("second!").unwrap();
    let mut old = 0u64;
    let mut new = 0u64;
    assert_eq!(bulwark_string_duplicate(first.as_ptr(), &mut old), OK);
    assert_eq!(bulwark_string_destroy(old), OK);
    assert_eq!(bulwark_string_duplicate(second.as_ptr(), &mut new), OK);

    let mut len = 0usize;
    assert_ne!(bulwark_string_len(old, &mut len), OK);
    assert_eq!(bulwark_string_len(new, &mut len), OK);
    assert_eq!(len, 7);
    assert_eq!(bulwark_string_destroy(new), OK);
}

// ── Arrays ──────────────────────────────────────────────────────────

#[test]
fn array_fill_grow_and_destroy() {
    let mut h = 0u64;
    assert_eq!(bulwark_array_create(10, &mut h), OK);
    for v in counting_sequence(10) {
        assert_eq!(bulwark_array_push(h, v), OK);
    }
    assert_eq!(bulwark_array_push(h, 10), BulwarkStatus::OutOfBounds as i32);
    assert_eq!(bulwark_array_reserve(h, 20), OK);
    assert_eq!(bulwark_array_push(h, 10), OK);

    let mut size = 0usize;
    assert_eq!(bulwark_array_size(h, &mut size), OK);
    assert_eq!(size, 11);
    let mut last = 0i32;
    assert_eq!(bulwark_array_get(h, 10, &mut last), OK);
    assert_eq!(last, 10);

    assert_eq!(bulwark_array_destroy(h), OK);
    assert_eq!(bulwark_array_destroy(h), BulwarkStatus::InvalidHandle as i32);
}

// ── Handles from different tables ───────────────────────────────────

#[test]
fn string_and_array_handles_never_cross() {
    let src = CString::new(GREETING).unwrap();
    let mut string = 0u64;
    let mut array = 0u64;
    assert_eq!(bulwark_string_duplicate(src.as_ptr(), &mut string), OK);
    assert_eq!(bulwark_array_create(4, &mut array), OK);
    assert_eq!(bulwark_array_push(array, 42), OK);

    let invalid = BulwarkStatus::InvalidHandle as i32;
    assert_eq!(bulwark_array_destroy(string), invalid);
    assert_eq!(bulwark_string_destroy(array), invalid);

    // Both owners are intact.
    let mut size = 0usize;
    assert_eq!(bulwark_array_size(array, &mut size), OK);
    assert_eq!(size, 1);
    let mut len = 0usize;
    assert_eq!(bulwark_string_len(string, &mut len), OK);
    assert_eq!(len, GREETING.len());

    // A released string handle stays dead in the array API too.
    assert_eq!(bulwark_string_destroy(string), OK);
    assert_eq!(bulwark_array_size(string, &mut size), invalid);
    assert_eq!(bulwark_array_destroy(array), OK);
}

// ── Agreement with the safe API ─────────────────────────────────────

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn abi_copy_matches_rust_copy(
            text in "[a-zA-Z0-9 ]{0,40}",
            capacity in 1usize..48,
        ) {
            let src = CString::new(text.clone()).unwrap();
            let mut via_abi = vec![GARBAGE as c_char; capacity];
            let mut via_rust = vec![GARBAGE; capacity];

            let status = bulwark_bounded_copy(
                via_abi.as_mut_ptr(),
                capacity,
                src.as_ptr(),
                ptr::null_mut(),
            );
            let expected = bulwark_text::copy(&mut via_rust, Some(text.as_bytes()));

            match expected {
                Ok(_) => prop_assert_eq!(status, OK),
                Err(ref e) => prop_assert_eq!(status, BulwarkStatus::from(e) as i32),
            }
            prop_assert_eq!(as_bytes(&via_abi), via_rust);
        }
    }
}

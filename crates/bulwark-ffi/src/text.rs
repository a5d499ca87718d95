//! Bounded string operations and owned-string handles.
//!
//! `bulwark_bounded_copy` and `bulwark_bounded_append` operate on
//! caller-owned buffers. `bulwark_string_duplicate` returns a handle to a
//! Rust-owned copy that stays valid until `bulwark_string_destroy`.

use std::ffi::{c_char, CStr};
use std::sync::Mutex;

use bulwark_text::{bounded, OwnedString, OwnedStringFactory};

use crate::handle::{HandleTable, STRING_KIND};
use crate::status::BulwarkStatus;

static STRINGS: Mutex<HandleTable<OwnedString, STRING_KIND>> = Mutex::new(HandleTable::new());

/// Borrow a NUL-terminated source, or `None` for a null pointer.
///
/// # Safety
///
/// A non-null `src` must point to a NUL-terminated string that outlives
/// the returned slice.
#[allow(unsafe_code)]
unsafe fn source<'a>(src: *const c_char) -> Option<&'a [u8]> {
    if src.is_null() {
        None
    } else {
        // SAFETY: forwarded from the caller.
        Some(unsafe { CStr::from_ptr(src) }.to_bytes())
    }
}

/// Shared body of the bounded copy and append entry points.
///
/// # Safety
///
/// A non-null `dest` must point to `dest_size` writable bytes. A non-null
/// `src` must be NUL-terminated and must not overlap `dest`. A non-null
/// `written_out` must be valid for writes.
#[allow(unsafe_code)]
unsafe fn bounded_op(
    op: fn(&mut [u8], Option<&[u8]>) -> Result<usize, bulwark_core::MemError>,
    dest: *mut c_char,
    dest_size: usize,
    src: *const c_char,
    written_out: *mut usize,
) -> i32 {
    if dest.is_null() {
        return BulwarkStatus::InvalidArgument as i32;
    }
    // SAFETY: forwarded from the caller.
    let src = unsafe { source(src) };
    // SAFETY: dest is non-null and the caller guarantees dest_size bytes.
    let dest = unsafe { std::slice::from_raw_parts_mut(dest.cast::<u8>(), dest_size) };
    match op(dest, src) {
        Ok(written) => {
            if !written_out.is_null() {
                // SAFETY: non-null, caller guarantees it is valid for writes.
                unsafe { *written_out = written };
            }
            BulwarkStatus::Ok as i32
        }
        Err(e) => BulwarkStatus::from(&e) as i32,
    }
}

/// Copy the NUL-terminated `src` into `dest`, which holds `dest_size` bytes.
///
/// Succeeds only if the whole source plus its terminator fits. On
/// `TRUNCATION` the destination is left untouched. `written_out` may be null;
/// otherwise it receives the number of content bytes copied.
///
/// `src` and `dest` must not overlap.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_bounded_copy(
    dest: *mut c_char,
    dest_size: usize,
    src: *const c_char,
    written_out: *mut usize,
) -> i32 {
    ffi_guard!({
        // SAFETY: the pointer contract above is the caller's.
        unsafe { bounded_op(bounded::copy, dest, dest_size, src, written_out) }
    })
}

/// Append the NUL-terminated `src` to the string already in `dest`.
///
/// `dest` must hold a terminator within its first `dest_size` bytes,
/// otherwise `INVALID_ARGUMENT` is returned. `written_out` may be null;
/// otherwise it receives the new content length.
///
/// `src` and `dest` must not overlap.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_bounded_append(
    dest: *mut c_char,
    dest_size: usize,
    src: *const c_char,
    written_out: *mut usize,
) -> i32 {
    ffi_guard!({
        // SAFETY: the pointer contract above is the caller's.
        unsafe { bounded_op(bounded::append, dest, dest_size, src, written_out) }
    })
}

/// Duplicate the NUL-terminated `src` into an owned string.
///
/// The handle written to `out` must eventually be passed to
/// [`bulwark_string_destroy`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_string_duplicate(src: *const c_char, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        // SAFETY: caller guarantees src is null or NUL-terminated.
        let src = unsafe { source(src) };
        let owned = match OwnedStringFactory::default().duplicate(src) {
            Ok(s) => s,
            Err(e) => return BulwarkStatus::from(&e) as i32,
        };
        let handle = match ffi_lock!(STRINGS).insert(owned) {
            Some(h) => h,
            None => return BulwarkStatus::AllocationFailed as i32,
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = handle };
        BulwarkStatus::Ok as i32
    })
}

/// Write the content length of an owned string, terminator excluded.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_string_len(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(STRINGS);
        let Some(s) = table.get(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = s.len() };
        BulwarkStatus::Ok as i32
    })
}

/// Copy an owned string, terminator included, into `buf`.
///
/// Returns `BUFFER_TOO_SMALL` without writing if `buf_len` cannot hold the
/// content plus terminator. `written_out` may be null; otherwise it receives
/// the content length.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_string_read(
    handle: u64,
    buf: *mut c_char,
    buf_len: usize,
    written_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if buf.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(STRINGS);
        let Some(s) = table.get(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        let bytes = s.as_bytes_with_nul();
        if bytes.len() > buf_len {
            return BulwarkStatus::BufferTooSmall as i32;
        }
        // SAFETY: caller guarantees buf points to buf_len writable bytes, and
        // bytes.len() <= buf_len. Table storage never aliases caller memory.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), bytes.len());
        }
        if !written_out.is_null() {
            // SAFETY: non-null, caller guarantees it is valid for writes.
            unsafe { *written_out = s.len() };
        }
        BulwarkStatus::Ok as i32
    })
}

/// Release an owned string.
///
/// A second call with the same handle returns `INVALID_HANDLE` and has no
/// other effect.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_string_destroy(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(STRINGS).remove(handle) {
            Some(_) => BulwarkStatus::Ok as i32,
            None => BulwarkStatus::InvalidHandle as i32,
        }
    })
}

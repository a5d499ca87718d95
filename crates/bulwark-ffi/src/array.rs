//! Integer array handles.
//!
//! Each handle owns an [`OwnedBuffer<i32>`]. Growth is never implicit:
//! `bulwark_array_push` on a full array returns `OUT_OF_BOUNDS` and the
//! caller decides whether to `bulwark_array_reserve`.

use std::sync::Mutex;

use bulwark_alloc::CheckedAllocator;
use bulwark_buffer::OwnedBuffer;

use crate::handle::{HandleTable, ARRAY_KIND};
use crate::status::BulwarkStatus;

static ARRAYS: Mutex<HandleTable<OwnedBuffer<i32>, ARRAY_KIND>> =
    Mutex::new(HandleTable::new());

/// Create an array with room for `capacity` zeroed elements and size 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_create(capacity: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let buffer = match OwnedBuffer::create(capacity, &CheckedAllocator::default()) {
            Ok(b) => b,
            Err(e) => return BulwarkStatus::from(&e) as i32,
        };
        let handle = match ffi_lock!(ARRAYS).insert(buffer) {
            Some(h) => h,
            None => return BulwarkStatus::AllocationFailed as i32,
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = handle };
        BulwarkStatus::Ok as i32
    })
}

/// Append `value`. A full array returns `OUT_OF_BOUNDS` and is unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_push(handle: u64, value: i32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(ARRAYS);
        match table.get_mut(handle) {
            Some(buf) => BulwarkStatus::from(buf.push(value)) as i32,
            None => BulwarkStatus::InvalidHandle as i32,
        }
    })
}

/// Read the element at `index`, which must be below the array's size.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_get(handle: u64, index: usize, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(ARRAYS);
        let Some(buf) = table.get(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        let Some(value) = buf.get(index) else {
            return BulwarkStatus::OutOfBounds as i32;
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = value };
        BulwarkStatus::Ok as i32
    })
}

/// Write `value` at `index`, which must be below the array's capacity.
///
/// If `index` is at or past the current size, the size grows to
/// `index + 1`; skipped slots read as zero.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_set(handle: u64, index: usize, value: i32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(ARRAYS);
        let Some(buf) = table.get_mut(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        if let Err(e) = buf.set(index, value) {
            return BulwarkStatus::from(&e) as i32;
        }
        if index >= buf.size() {
            return BulwarkStatus::from(buf.set_size(index + 1)) as i32;
        }
        BulwarkStatus::Ok as i32
    })
}

/// Write the number of valid elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_size(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(ARRAYS);
        let Some(buf) = table.get(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = buf.size() };
        BulwarkStatus::Ok as i32
    })
}

/// Write the number of allocated slots.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_capacity(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return BulwarkStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(ARRAYS);
        let Some(buf) = table.get(handle) else {
            return BulwarkStatus::InvalidHandle as i32;
        };
        // SAFETY: out is non-null and caller guarantees it is valid for writes.
        unsafe { *out = buf.capacity() };
        BulwarkStatus::Ok as i32
    })
}

/// Change the capacity to `new_capacity`, keeping existing elements.
///
/// Shrinking below the size drops the excess elements. On
/// `ALLOCATION_FAILED` the array keeps its old storage and contents.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_reserve(handle: u64, new_capacity: usize) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(ARRAYS);
        match table.get_mut(handle) {
            Some(buf) => {
                let result = buf.resize_capacity(new_capacity, &CheckedAllocator::default());
                BulwarkStatus::from(result) as i32
            }
            None => BulwarkStatus::InvalidHandle as i32,
        }
    })
}

/// Release an array.
///
/// A second call with the same handle returns `INVALID_HANDLE` and has no
/// other effect.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn bulwark_array_destroy(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(ARRAYS).remove(handle) {
            Some(mut buf) => {
                buf.destroy();
                BulwarkStatus::Ok as i32
            }
            None => BulwarkStatus::InvalidHandle as i32,
        }
    })
}

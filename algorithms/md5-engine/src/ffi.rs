//! C-API Bindings
//!
//! Exposes the MD5 engine to C/C++ via FFI with pointer checks and panic
//! boundaries.

#![allow(unsafe_code)]

use crate::kernels::constants::DIGEST_SIZE;
use crate::oneshot;

use std::ptr;
use std::slice;

// =============================================================================
// STATUS CODES
// =============================================================================

/// Call succeeded.
pub const MD5_ENGINE_OK: i32 = 0;
/// A required pointer was null.
pub const MD5_ENGINE_ERR_NULL: i32 = -1;
/// A panic was caught at the boundary.
pub const MD5_ENGINE_ERR_PANIC: i32 = -2;
/// The input length cannot be encoded in the 64-bit trailer.
pub const MD5_ENGINE_ERR_TOO_LARGE: i32 = -3;

/// View `(ptr, len)` as a byte slice. A null pointer is accepted for `len == 0`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the MD5 digest of `input_len` bytes.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for 16 writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
/// - `-3`: Input too large
#[no_mangle]
pub unsafe extern "C" fn md5_engine_transform(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
) -> i32 {
    if output_ptr.is_null() {
        return MD5_ENGINE_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return MD5_ENGINE_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| oneshot::try_transform(input));

    match result {
        Ok(Ok(digest)) => {
            ptr::copy_nonoverlapping(digest.as_ptr(), output_ptr, DIGEST_SIZE);
            MD5_ENGINE_OK
        }
        Ok(Err(_)) => MD5_ENGINE_ERR_TOO_LARGE,
        Err(_) => MD5_ENGINE_ERR_PANIC,
    }
}

/// Verify data matches an expected digest in constant time.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `digest_ptr` must point to exactly 16 bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn md5_engine_verify(
    input_ptr: *const u8,
    input_len: usize,
    digest_ptr: *const u8,
) -> i32 {
    if digest_ptr.is_null() {
        return MD5_ENGINE_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return MD5_ENGINE_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let mut expected = [0u8; DIGEST_SIZE];
        expected.copy_from_slice(slice::from_raw_parts(digest_ptr, DIGEST_SIZE));
        oneshot::verify(input, &expected)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => MD5_ENGINE_ERR_PANIC,
    }
}

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use super::NATLIB_ERROR;

/// Borrow a C string as UTF-8, or `None` for null / invalid input
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn borrow_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Get the length of a string in UTF-8 code units (bytes)
///
/// Returns -1 for a null pointer or invalid UTF-8.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn string_length(s: *const c_char) -> c_int {
    match borrow_str(s) {
        Some(rust_str) => natlib_core::string_length(rust_str),
        None => NATLIB_ERROR,
    }
}

/// Reverse a string by code point, returning a newly allocated string
///
/// Returns null for a null pointer or invalid UTF-8.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated C string. The caller owns the
/// result and must release it with [`free_string`].
#[no_mangle]
pub unsafe extern "C" fn reverse_string(s: *const c_char) -> *mut c_char {
    let Some(rust_str) = borrow_str(s) else {
        return std::ptr::null_mut();
    };

    // Input came from a C string, so the reversal has no interior NUL
    match CString::new(natlib_core::reverse_string(rust_str)) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string allocated by this library
///
/// # Safety
/// `s` must be null or a pointer returned by [`reverse_string`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

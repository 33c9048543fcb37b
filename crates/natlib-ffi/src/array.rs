use std::os::raw::c_int;

/// Sum an array of integers, wrapping on overflow
///
/// Returns 0 for a null pointer or a non-positive length.
///
/// # Safety
/// When `arr` is non-null it must point to at least `len` readable, initialized
/// `c_int` values.
#[no_mangle]
pub unsafe extern "C" fn sum_array(arr: *const c_int, len: c_int) -> c_int {
    if arr.is_null() || len <= 0 {
        return 0;
    }

    let values = std::slice::from_raw_parts(arr, len as usize);
    natlib_core::sum_array(values)
}

//! Safe wrappers over the natlib C ABI.
//!
//! [`NativeOps`] is the seam the driver is written against. [`CBridge`] is the
//! production implementation: every method converts its arguments to C types,
//! calls the `extern "C"` export and maps sentinel results to [`CallError`].

use std::ffi::{CStr, CString, NulError};
use std::os::raw::{c_char, c_int};
use std::ptr::NonNull;
use std::str::Utf8Error;
use tracing::debug;

/// Errors raised while calling across the C boundary
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("{op} rejected input {input}")]
    Rejected { op: &'static str, input: String },

    #[error("string argument contains an interior NUL byte")]
    InteriorNul(#[from] NulError),

    #[error("{op} returned a null pointer")]
    NullResult { op: &'static str },

    #[error("native string is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("array of {0} elements exceeds the C int range")]
    ArrayTooLong(usize),
}

/// The operations exported by the native library
pub trait NativeOps {
    fn add_numbers(&self, a: i32, b: i32) -> i32;
    fn multiply_doubles(&self, a: f64, b: f64) -> f64;
    fn factorial(&self, n: i32) -> Result<i32, CallError>;
    fn is_prime(&self, n: i32) -> bool;
    fn fibonacci(&self, n: i32) -> Result<i32, CallError>;
    fn string_length(&self, s: &str) -> Result<i32, CallError>;
    fn reverse_string(&self, s: &str) -> Result<String, CallError>;
    fn sum_array(&self, values: &[i32]) -> Result<i32, CallError>;
}

/// String allocated by the native library, released with `free_string` on drop
struct NativeString(NonNull<c_char>);

impl NativeString {
    /// # Safety
    /// `ptr` must be null or a pointer returned by `natlib::reverse_string`
    /// that nothing else will free.
    unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(NativeString)
    }

    fn to_str(&self) -> Result<&str, Utf8Error> {
        unsafe { CStr::from_ptr(self.0.as_ptr()) }.to_str()
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        unsafe { natlib::free_string(self.0.as_ptr()) }
    }
}

fn check_sentinel(op: &'static str, input: i32, result: c_int) -> Result<i32, CallError> {
    if result == natlib::NATLIB_ERROR {
        Err(CallError::Rejected { op, input: input.to_string() })
    } else {
        Ok(result)
    }
}

/// Calls the natlib exports linked into this binary
#[derive(Debug, Default, Clone, Copy)]
pub struct CBridge {
    _private: (),
}

impl CBridge {
    pub fn new() -> Self {
        debug!("natlib C bridge initialized");
        CBridge { _private: () }
    }
}

impl NativeOps for CBridge {
    fn add_numbers(&self, a: i32, b: i32) -> i32 {
        let result = natlib::add_numbers(a, b);
        debug!(a, b, result, "add_numbers");
        result
    }

    fn multiply_doubles(&self, a: f64, b: f64) -> f64 {
        let result = natlib::multiply_doubles(a, b);
        debug!(a, b, result, "multiply_doubles");
        result
    }

    fn factorial(&self, n: i32) -> Result<i32, CallError> {
        let result = natlib::factorial(n);
        debug!(n, result, "factorial");
        check_sentinel("factorial", n, result)
    }

    fn is_prime(&self, n: i32) -> bool {
        let result = natlib::is_prime(n);
        debug!(n, result, "is_prime");
        result != 0
    }

    fn fibonacci(&self, n: i32) -> Result<i32, CallError> {
        let result = natlib::fibonacci(n);
        debug!(n, result, "fibonacci");
        check_sentinel("fibonacci", n, result)
    }

    fn string_length(&self, s: &str) -> Result<i32, CallError> {
        let c_string = CString::new(s)?;
        let result = unsafe { natlib::string_length(c_string.as_ptr()) };
        debug!(input = s, result, "string_length");

        if result == natlib::NATLIB_ERROR {
            return Err(CallError::Rejected { op: "string_length", input: format!("{:?}", s) });
        }
        Ok(result)
    }

    fn reverse_string(&self, s: &str) -> Result<String, CallError> {
        let c_string = CString::new(s)?;
        let raw = unsafe { natlib::reverse_string(c_string.as_ptr()) };
        let reversed = unsafe { NativeString::from_raw(raw) }
            .ok_or(CallError::NullResult { op: "reverse_string" })?;

        let result = reversed.to_str()?.to_owned();
        debug!(input = s, result = %result, "reverse_string");
        Ok(result)
    }

    fn sum_array(&self, values: &[i32]) -> Result<i32, CallError> {
        let len = c_int::try_from(values.len()).map_err(|_| CallError::ArrayTooLong(values.len()))?;
        let result = unsafe { natlib::sum_array(values.as_ptr(), len) };
        debug!(len, result, "sum_array");
        Ok(result)
    }
}

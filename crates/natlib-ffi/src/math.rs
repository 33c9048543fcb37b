use std::os::raw::{c_double, c_int};
use super::NATLIB_ERROR;

/// Add two integers, wrapping on overflow
#[no_mangle]
pub extern "C" fn add_numbers(a: c_int, b: c_int) -> c_int {
    natlib_core::add(a, b)
}

/// Multiply two doubles
#[no_mangle]
pub extern "C" fn multiply_doubles(a: c_double, b: c_double) -> c_double {
    natlib_core::multiply(a, b)
}

/// Calculate n!
///
/// Returns -1 when `n` is negative or n! does not fit in a `c_int` (n > 12).
#[no_mangle]
pub extern "C" fn factorial(n: c_int) -> c_int {
    natlib_core::factorial(n).unwrap_or(NATLIB_ERROR)
}

/// Check if a number is prime
/// Returns 1 for prime, 0 otherwise
#[no_mangle]
pub extern "C" fn is_prime(n: c_int) -> c_int {
    c_int::from(natlib_core::is_prime(n))
}

/// Calculate the nth Fibonacci number
///
/// Returns -1 when `n` is negative or F(n) does not fit in a `c_int` (n > 46).
#[no_mangle]
pub extern "C" fn fibonacci(n: c_int) -> c_int {
    natlib_core::fibonacci(n).unwrap_or(NATLIB_ERROR)
}

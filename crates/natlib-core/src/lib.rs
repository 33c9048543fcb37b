//! Safe Rust implementations of the natlib operations.
//!
//! Integer widths follow the C ABI exposed by `natlib-ffi`: every integer is an
//! `i32`. Addition and array sums wrap at that width, while factorial and
//! Fibonacci are checked and report [`MathError::Overflow`] instead.

#[cfg(test)]
mod tests;

mod errors;

pub use errors::MathError;

/// Largest `n` whose factorial fits in an `i32` (12! = 479001600)
pub const FACTORIAL_MAX_INPUT: i32 = 12;

/// Largest `n` whose Fibonacci number fits in an `i32` (F(46) = 1836311903)
pub const FIBONACCI_MAX_INPUT: i32 = 46;

/// Add two integers, wrapping on overflow
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiply two doubles
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Calculate n! for `0 <= n <= 12`
pub fn factorial(n: i32) -> Result<i32, MathError> {
    if n < 0 {
        return Err(MathError::Negative(n));
    }

    (1..=n)
        .try_fold(1i32, |acc, k| acc.checked_mul(k))
        .ok_or(MathError::Overflow { op: "factorial", n })
}

/// Check if a number is prime
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i <= n / i keeps the bound check inside i32 range
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Calculate the nth Fibonacci number (iterative approach)
pub fn fibonacci(n: i32) -> Result<i32, MathError> {
    if n < 0 {
        return Err(MathError::Negative(n));
    }
    if n <= 1 {
        return Ok(n);
    }

    let mut a: i32 = 0;
    let mut b: i32 = 1;

    for _ in 2..=n {
        let next = a
            .checked_add(b)
            .ok_or(MathError::Overflow { op: "fibonacci", n })?;
        a = b;
        b = next;
    }

    Ok(b)
}

/// Length of a string in UTF-8 code units (bytes), saturating at `i32::MAX`
pub fn string_length(s: &str) -> i32 {
    i32::try_from(s.len()).unwrap_or(i32::MAX)
}

/// Reverse a string by Unicode scalar value
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Sum a slice of integers, wrapping on overflow
pub fn sum_array(values: &[i32]) -> i32 {
    values.iter().fold(0, |acc, &v| add(acc, v))
}

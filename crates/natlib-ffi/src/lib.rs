//! C ABI surface for natlib.
//!
//! Every export is `#[no_mangle] extern "C"` and uses the widths declared in
//! `include/natlib.h`. Failures never unwind across the boundary; they are
//! reported as [`NATLIB_ERROR`] for integer results and as a null pointer for
//! string results.


pub mod array;
pub mod math;
pub mod string;

use std::os::raw::c_int;

pub use array::sum_array;
pub use math::{add_numbers, factorial, fibonacci, is_prime, multiply_doubles};
pub use string::{free_string, reverse_string, string_length};

/// Sentinel returned by integer exports when the input is rejected
pub const NATLIB_ERROR: c_int = -1;

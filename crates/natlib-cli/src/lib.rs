//! Caller shim for the natlib native library: architecture detection, a safe
//! bridge over the C ABI and the driver that exercises every export.


pub mod arch;
pub mod bridge;
pub mod driver;
pub mod logging;
pub mod report;

pub use arch::{host_arch, normalized_arch, resolve_arch, Arch};
pub use bridge::{CBridge, CallError, NativeOps};
pub use driver::{sample_invocations, Driver, Invocation};
pub use report::{Entry, Report, Section};

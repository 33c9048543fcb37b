/// Errors raised by the checked integer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("negative input: {0}")]
    Negative(i32),

    #[error("{op}({n}) does not fit in a 32-bit integer")]
    Overflow { op: &'static str, n: i32 },
}

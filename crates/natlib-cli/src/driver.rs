use crate::arch::Arch;
use crate::bridge::{CallError, NativeOps};
use crate::report::{Entry, Report};
use tracing::info;

pub const SAMPLE_TEXT: &str = "Hello, World!";
pub const SAMPLE_ARRAY: [i32; 5] = [1, 2, 3, 4, 5];

/// Wrap text in double quotes without escaping, so it prints as entered
fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// A single call to one of the native exports
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    AddNumbers(i32, i32),
    MultiplyDoubles(f64, f64),
    Factorial(i32),
    IsPrime(i32),
    Fibonacci(i32),
    StringLength(String),
    ReverseString(String),
    SumArray(Vec<i32>),
}

impl Invocation {
    /// Name of the C symbol this invocation calls
    pub fn symbol(&self) -> &'static str {
        match self {
            Invocation::AddNumbers(..) => "add_numbers",
            Invocation::MultiplyDoubles(..) => "multiply_doubles",
            Invocation::Factorial(_) => "factorial",
            Invocation::IsPrime(_) => "is_prime",
            Invocation::Fibonacci(_) => "fibonacci",
            Invocation::StringLength(_) => "string_length",
            Invocation::ReverseString(_) => "reverse_string",
            Invocation::SumArray(_) => "sum_array",
        }
    }

    pub fn section(&self) -> &'static str {
        match self {
            Invocation::AddNumbers(..) | Invocation::MultiplyDoubles(..) => "Basic Arithmetic",
            Invocation::Factorial(_) | Invocation::IsPrime(_) | Invocation::Fibonacci(_) => {
                "Mathematical Functions"
            }
            Invocation::StringLength(_) | Invocation::ReverseString(_) => "String Functions",
            Invocation::SumArray(_) => "Array Functions",
        }
    }

    /// Render the call as source text, e.g. `add_numbers(5, 3)`
    pub fn call_text(&self) -> String {
        let args = match self {
            Invocation::AddNumbers(a, b) => format!("{}, {}", a, b),
            Invocation::MultiplyDoubles(a, b) => format!("{:?}, {:?}", a, b),
            Invocation::Factorial(n) | Invocation::IsPrime(n) | Invocation::Fibonacci(n) => {
                n.to_string()
            }
            Invocation::StringLength(s) | Invocation::ReverseString(s) => quoted(s),
            Invocation::SumArray(values) => format!("{:?}", values),
        };
        format!("{}({})", self.symbol(), args)
    }

    /// Perform the call and render its result
    pub fn invoke(&self, ops: &dyn NativeOps) -> Result<Entry, CallError> {
        let value = match self {
            Invocation::AddNumbers(a, b) => ops.add_numbers(*a, *b).to_string(),
            Invocation::MultiplyDoubles(a, b) => format!("{:.2}", ops.multiply_doubles(*a, *b)),
            Invocation::Factorial(n) => ops.factorial(*n)?.to_string(),
            Invocation::IsPrime(n) => ops.is_prime(*n).to_string(),
            Invocation::Fibonacci(n) => ops.fibonacci(*n)?.to_string(),
            Invocation::StringLength(s) => ops.string_length(s)?.to_string(),
            Invocation::ReverseString(s) => quoted(&ops.reverse_string(s)?),
            Invocation::SumArray(values) => ops.sum_array(values)?.to_string(),
        };

        Ok(Entry { call: self.call_text(), value })
    }
}

/// The fixed calls made by a driver run, in order
pub fn sample_invocations() -> Vec<Invocation> {
    vec![
        Invocation::AddNumbers(5, 3),
        Invocation::MultiplyDoubles(2.5, 4.0),
        Invocation::Factorial(5),
        Invocation::IsPrime(17),
        Invocation::IsPrime(16),
        Invocation::Fibonacci(10),
        Invocation::StringLength(SAMPLE_TEXT.to_string()),
        Invocation::ReverseString(SAMPLE_TEXT.to_string()),
        Invocation::SumArray(SAMPLE_ARRAY.to_vec()),
    ]
}

/// Calls every native export once and collects the results
pub struct Driver<'a> {
    ops: &'a dyn NativeOps,
    arch: Arch,
}

impl<'a> Driver<'a> {
    pub fn new(ops: &'a dyn NativeOps, arch: Arch) -> Self {
        Driver { ops, arch }
    }

    /// Run the fixed call sequence. The first failing call aborts the run.
    pub fn run(&self) -> Result<Report, CallError> {
        info!(arch = %self.arch, "running native call sequence");

        let mut report = Report::new(self.arch);
        for invocation in sample_invocations() {
            let entry = invocation.invoke(self.ops)?;
            report.record(invocation.section(), entry);
        }

        info!(calls = report.entry_count(), "native call sequence finished");
        Ok(report)
    }
}

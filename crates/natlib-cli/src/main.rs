use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use natlib_cli::{host_arch, logging, resolve_arch, CBridge, Driver, Invocation};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "natlib-cli")]
#[command(about = "Call the natlib native library over its C ABI", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Call every native function once with sample inputs (default)
    Run {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the normalized architecture name
    Arch {
        /// Normalize this value instead of the host architecture (blank means host)
        #[arg(long, env = "NATLIB_ARCH")]
        raw: Option<String>,
    },
    /// Call a single native function
    Call {
        #[command(subcommand)]
        op: CallOp,
    },
}

#[derive(Subcommand)]
enum CallOp {
    /// add_numbers(a, b)
    #[command(allow_negative_numbers = true)]
    Add { a: i32, b: i32 },
    /// multiply_doubles(a, b)
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },
    /// factorial(n)
    #[command(allow_negative_numbers = true)]
    Factorial { n: i32 },
    /// is_prime(n)
    #[command(allow_negative_numbers = true)]
    IsPrime { n: i32 },
    /// fibonacci(n)
    #[command(allow_negative_numbers = true)]
    Fibonacci { n: i32 },
    /// string_length(text)
    Length { text: String },
    /// reverse_string(text)
    Reverse { text: String },
    /// sum_array(values...)
    #[command(allow_negative_numbers = true)]
    Sum { values: Vec<i32> },
}

impl From<CallOp> for Invocation {
    fn from(op: CallOp) -> Self {
        match op {
            CallOp::Add { a, b } => Invocation::AddNumbers(a, b),
            CallOp::Multiply { a, b } => Invocation::MultiplyDoubles(a, b),
            CallOp::Factorial { n } => Invocation::Factorial(n),
            CallOp::IsPrime { n } => Invocation::IsPrime(n),
            CallOp::Fibonacci { n } => Invocation::Fibonacci(n),
            CallOp::Length { text } => Invocation::StringLength(text),
            CallOp::Reverse { text } => Invocation::ReverseString(text),
            CallOp::Sum { values } => Invocation::SumArray(values),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or(Commands::Run { json: false, output: None }) {
        Commands::Run { json, output } => run_command(json, output),
        Commands::Arch { raw } => arch_command(raw),
        Commands::Call { op } => call_command(op.into()),
    }
}

fn run_command(json: bool, output: Option<PathBuf>) -> Result<()> {
    let bridge = CBridge::new();
    let report = Driver::new(&bridge, host_arch())
        .run()
        .context("Native call sequence failed")?;

    let rendered = if json {
        let mut json = report.render_json().context("Failed to serialize report")?;
        json.push('\n');
        json
    } else {
        report.render_text()
    };

    match output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("{} Wrote report: {}", "✓".green().bold(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn arch_command(raw: Option<String>) -> Result<()> {
    println!("{}", resolve_arch(raw.as_deref()));
    Ok(())
}

fn call_command(invocation: Invocation) -> Result<()> {
    let bridge = CBridge::new();
    let entry = invocation
        .invoke(&bridge)
        .with_context(|| format!("Call to {} failed", invocation.symbol()))?;
    println!("{} = {}", entry.call, entry.value);
    Ok(())
}

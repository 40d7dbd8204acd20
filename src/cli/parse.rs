use clap::{Parser, Subcommand};

use crate::core::constants::DEFAULT_BOUND;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "triangle-sweep",
    about = "Mirrored numeric triangle patterns in the terminal"
)]
pub struct Cli {
    /// Bare invocation prints the default pattern.
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one full sweep: rows grow to the bound, then shrink back
    Print(PrintArgs),
    /// Animated pulse: the triangle grows and collapses in place
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// `triangle-sweep print …`
#[derive(Parser, Debug)]
pub struct PrintArgs {
    /// Highest row index; the widest row holds bound + 1 elements.
    /// Negative bounds print nothing and still succeed.
    #[arg(short, long, default_value_t = DEFAULT_BOUND, allow_negative_numbers = true)]
    pub bound: i64,

    /// Color (name or `#RRGGBB`); rows are plain when omitted
    #[arg(long)]
    pub color: Option<String>,

    /// Clamp the bound so the widest row fits the terminal
    #[arg(long)]
    pub fit: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl Default for PrintArgs {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            color: None,
            fit: false,
            debug: false,
        }
    }
}

/// `triangle-sweep demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(short, long, default_value_t = DEFAULT_BOUND, allow_negative_numbers = true)]
    pub bound: i64,
    #[arg(long, default_value_t = 12)]
    pub fps: u64,
    #[arg(long, default_value_t = 1, help = "How many grow/collapse pulses to run")]
    pub cycles: usize,
    #[arg(long, default_value = "amber")]
    pub color: String,
    #[arg(long, default_value_t = false, help = "Emit timing diagnostics")]
    pub debug: bool,
}

//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{Ansi, ColorError, colorize},
    config::{Config, ConfigBuilder},
    constants::DEFAULT_BOUND,
    error::PatternError,
    sweep::{Phase, Sweep},
};

pub use crate::render::{Renderer, encode_row_into, encode_rows};

/// Convenience function: print one full mirrored sweep for `bound` to
/// standard output. Negative bounds print nothing and still succeed.
pub fn print_sweep(bound: i64) -> Result<(), PatternError> {
    let cfg = Config::builder(bound).build()?;
    let rows = encode_rows(Sweep::new(bound));
    Renderer::full().render(&cfg, &rows)
}

//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod sweep;

// re-export frequently-used items for convenience
pub use bounds::{digit_count, max_row_for, row_width};
pub use color::{Ansi, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{CHROME_ROWS, DEFAULT_BOUND, FRAME_TOP_ROW};
pub use error::PatternError;
pub use sweep::{Phase, Sweep};

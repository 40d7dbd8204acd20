//! Turns row indices into bytes on a terminal.

pub mod frame;
pub mod line;

pub use frame::Renderer;
pub use line::{encode_row_into, encode_rows};

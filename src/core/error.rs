//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::color::ColorError;

/// Top-level error type bubbled up by public APIs.
///
/// The sweep itself is total: every bound, including negative ones,
/// produces a well-defined (possibly empty) pattern. Only the terminal
/// write and the colour spec can fail.
#[derive(Debug)]
pub enum PatternError {
    Io(io::Error),
    Color(ColorError),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Io(e) => write!(f, "{e}"),
            PatternError::Color(e) => write!(f, "{e}"),
        }
    }
}
impl Error for PatternError {}

// automatic conversions
impl From<io::Error> for PatternError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ColorError> for PatternError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

//! A collection of constants.

/// Default highest row index; the widest row then carries 8 elements.
pub const DEFAULT_BOUND: i64 = 7;

/// Terminal lines the demo chrome occupies around the pattern rows
/// (title, spacer, footer, parked cursor).
pub const CHROME_ROWS: usize = 4;

/// First terminal line (1-based) occupied by pattern rows in demo mode.
pub const FRAME_TOP_ROW: usize = 3;

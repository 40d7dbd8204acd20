//! Geometry helpers: row widths + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::CHROME_ROWS;

/// Decimal digit count of a non-negative integer (`0` counts as one digit).
#[inline]
#[must_use]
pub const fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Byte width of the encoded row `row`: every element is one leading space
/// plus its decimal digits. Negative rows encode to nothing.
#[must_use]
pub fn row_width(row: i64) -> usize {
    if row < 0 {
        return 0;
    }
    (0..=row.unsigned_abs()).map(|j| 1 + digit_count(j)).sum()
}

/// Widest row index whose encoded row still fits in `cols` columns.
///
/// Returns `-1` when not even `" 0"` fits.
#[must_use]
pub fn max_row_for(cols: usize) -> i64 {
    let mut width = 0usize;
    let mut row: i64 = -1;
    loop {
        let next = row + 1;
        width += 1 + digit_count(next.unsigned_abs());
        if width > cols {
            return row;
        }
        row = next;
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Clamp `bound` so the widest row fits the terminal width.
///
/// Clamping only ever lowers a bound; negative bounds pass through.
#[inline]
#[must_use]
pub fn fit_width((w, _h): (Width, Height), bound: i64) -> i64 {
    bound.min(max_row_for(w.0 as usize))
}

/// Clamp `bound` so the tallest animated frame (`bound + 1` rows plus
/// chrome) also fits the terminal height.
#[must_use]
pub fn fit_frame((w, h): (Width, Height), bound: i64) -> i64 {
    let rows_available = (h.0 as usize).saturating_sub(CHROME_ROWS);
    let by_height = rows_available as i64 - 1;
    fit_width((w, h), bound).min(by_height)
}

#[cfg(test)]
mod tests {
    use super::{digit_count, fit_frame, fit_width, max_row_for, row_width};
    use terminal_size::{Height, Width};

    #[test]
    fn digit_count_handles_decade_boundaries() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn row_width_sums_space_prefixed_elements() {
        assert_eq!(row_width(0), 2); // " 0"
        assert_eq!(row_width(3), 8); // " 0 1 2 3"
        assert_eq!(row_width(10), 23); // ten 2-byte elements + one 3-byte
        assert_eq!(row_width(-1), 0);
    }

    #[test]
    fn max_row_respects_the_column_limit() {
        assert_eq!(max_row_for(0), -1);
        assert_eq!(max_row_for(1), -1);
        assert_eq!(max_row_for(2), 0);
        assert_eq!(max_row_for(7), 2);
        assert_eq!(max_row_for(8), 3);
    }

    #[test]
    fn fitting_never_raises_a_bound() {
        let term = (Width(80), Height(30));
        assert_eq!(fit_width(term, 3), 3);
        assert_eq!(fit_width(term, -1), -1);
        assert_eq!(fit_width((Width(8), Height(30)), 100), 3);
    }

    #[test]
    fn frame_fitting_also_clamps_by_height() {
        // 10 lines minus chrome leaves 6 rows, so the bound caps at 5.
        assert_eq!(fit_frame((Width(200), Height(10)), 50), 5);
        // Width is the binding constraint here.
        assert_eq!(fit_frame((Width(8), Height(100)), 50), 3);
    }
}

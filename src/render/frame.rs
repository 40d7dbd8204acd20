//! Terminal frame writer with:
//! - plain streaming output for one-shot prints (pipe-safe, byte-exact)
//! - per-row diffing against the previous frame for animation
//! - cursor hidden while an animated frame is being written

use std::io::{Write, stdout};

use crate::core::{
    color::{RESET, colorize},
    config::Config,
    constants::FRAME_TOP_ROW,
    error::PatternError,
};

// --- Helpers ---

/// Hides the cursor on construction and shows it again on Drop
struct CursorGuard;
impl CursorGuard {
    fn new() -> Self {
        let _ = write!(stdout(), "\x1b[?25l");
        CursorGuard
    }
}
impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = write!(stdout(), "\x1b[?25h");
        let _ = stdout().flush();
    }
}

/// Append every row, tinted and newline-terminated, to `out`.
fn write_rows(out: &mut Vec<u8>, rows: &[Vec<u8>], color_seq: Option<&str>) {
    for row in rows {
        if let Some(seq) = color_seq {
            out.extend_from_slice(seq.as_bytes());
        }
        out.extend_from_slice(row);
        if color_seq.is_some() {
            out.extend_from_slice(RESET.as_bytes());
        }
        out.push(b'\n');
    }
}

enum Strategy {
    /// Stream every row once, top to bottom.
    Full,
    /// Rewrite only the rows that changed since the previous frame.
    Delta,
}

pub struct Renderer {
    strat: Strategy,
    first_frame: bool,

    // previous frame's rows, for the delta diff
    prev: Vec<Vec<u8>>,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn full() -> Self {
        Self::new(Strategy::Full)
    }
    #[inline]
    #[must_use]
    pub fn delta() -> Self {
        Self::new(Strategy::Delta)
    }

    fn new(strat: Strategy) -> Self {
        Self {
            strat,
            first_frame: true,
            prev: Vec::new(),
        }
    }

    /// Main render entry.
    pub fn render(&mut self, cfg: &Config, rows: &[Vec<u8>]) -> Result<(), PatternError> {
        match self.strat {
            Strategy::Full => Self::render_full(cfg, rows),
            Strategy::Delta => self.render_delta(cfg, rows),
        }
    }

    /// One batched write of the whole pattern, no cursor control.
    fn render_full(cfg: &Config, rows: &[Vec<u8>]) -> Result<(), PatternError> {
        let color_seq = cfg.color.map(|c| c.to_string());
        let payload: usize = rows.iter().map(|r| r.len() + 1).sum();
        let per_row = color_seq.as_ref().map_or(0, |s| s.len() + RESET.len());
        let mut out = Vec::with_capacity(payload + rows.len() * per_row);
        write_rows(&mut out, rows, color_seq.as_deref());

        let mut term = stdout().lock();
        term.write_all(&out)?;
        term.flush()?;
        Ok(())
    }

    /// Reposition-and-rewrite for the rows that differ from the previous
    /// frame; rows the new frame no longer has are blanked.
    fn render_delta(&mut self, cfg: &Config, rows: &[Vec<u8>]) -> Result<(), PatternError> {
        let color_seq = cfg.color.map(|c| c.to_string());
        let mut term = stdout().lock();
        let _cursor = CursorGuard::new();

        if self.first_frame {
            write!(term, "\x1b[2J\x1b[1;1H")?;
            if !cfg.title.is_empty() {
                match cfg.color {
                    Some(c) => write!(term, "{}", colorize(c, &cfg.title))?,
                    None => write!(term, "{}", cfg.title)?,
                }
            }
            if let Some(sub) = &cfg.subtitle {
                let footer_row = Self::footer_row(cfg);
                write!(term, "\x1b[{footer_row};1H{sub}")?;
            }
            self.first_frame = false;
        }

        for (i, row) in rows.iter().enumerate() {
            if self.prev.get(i) == Some(row) {
                continue;
            }
            let line = FRAME_TOP_ROW + i;
            write!(term, "\x1b[{line};1H")?;
            if let Some(seq) = &color_seq {
                term.write_all(seq.as_bytes())?;
            }
            term.write_all(row)?;
            if color_seq.is_some() {
                term.write_all(RESET.as_bytes())?;
            }
            // erase whatever a longer previous row left behind
            write!(term, "\x1b[K")?;
        }

        for i in rows.len()..self.prev.len() {
            let line = FRAME_TOP_ROW + i;
            write!(term, "\x1b[{line};1H\x1b[K")?;
        }

        let park = Self::footer_row(cfg) + 1;
        write!(term, "\x1b[{park};1H")?;
        term.flush()?;

        self.prev = rows.to_vec();
        Ok(())
    }

    /// Line below the tallest frame this config can produce.
    fn footer_row(cfg: &Config) -> usize {
        let tallest = usize::try_from(cfg.bound.saturating_add(1)).unwrap_or(0);
        FRAME_TOP_ROW + tallest + 1
    }
}

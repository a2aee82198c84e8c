//! Terminal drawing surface.
//!
//! Maps the logical play field onto however many character cells the
//! terminal currently has.  Rectangles become runs of full-block glyphs;
//! text is printed at the cell under its logical origin.  `Session` owns the
//! terminal modes for the lifetime of the game.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Attribute, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::entities::Rect;
use crate::surface::{Color, Surface, TextSize};

const BLOCK: &str = "█";

fn term_color(color: Color) -> style::Color {
    let (r, g, b) = color.rgb();
    style::Color::Rgb { r, g, b }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    width: f32,
    height: f32,
    background: Color,
    /// (row, first col, end col) of every text run drawn since the last clear.
    text_runs: Vec<(u16, u16, u16)>,
}

impl<W: Write> TerminalSurface<W> {
    /// A surface of `width`×`height` logical units drawn onto a
    /// `cols`×`rows` terminal.
    pub fn new(out: W, cols: u16, rows: u16, width: u32, height: u32) -> Self {
        Self {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
            width: width as f32,
            height: height as f32,
            background: Color::BLACK,
            text_runs: Vec::new(),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn col_of(&self, x: f32) -> f32 {
        x * self.cols as f32 / self.width
    }

    fn row_of(&self, y: f32) -> f32 {
        y * self.rows as f32 / self.height
    }

    /// Cell span covered by `rect`, clipped to the terminal.  Any partially
    /// covered cell counts.  Returns `None` when nothing is visible.
    pub fn cell_span(&self, rect: Rect) -> Option<((u16, u16), (u16, u16))> {
        let c0 = self.col_of(rect.x as f32).floor().max(0.0);
        let c1 = self.col_of(rect.right() as f32).ceil().min(self.cols as f32);
        let r0 = self.row_of(rect.y as f32).floor().max(0.0);
        let r1 = self.row_of(rect.bottom() as f32).ceil().min(self.rows as f32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some(((c0 as u16, c1 as u16), (r0 as u16, r1 as u16)))
    }

    /// First row at or below `row` where columns `c0..c1` hold no text yet.
    /// Short terminals squeeze nearby lines onto one row; this keeps them apart.
    fn free_text_row(&self, mut row: u16, c0: u16, c1: u16) -> u16 {
        while self
            .text_runs
            .iter()
            .any(|&(r, a, b)| r == row && a < c1 && c0 < b)
        {
            row += 1;
        }
        row
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) -> std::io::Result<()> {
        self.background = color;
        self.text_runs.clear();
        self.out.queue(style::SetBackgroundColor(term_color(color)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> std::io::Result<()> {
        let Some(((c0, c1), (r0, r1))) = self.cell_span(rect) else {
            return Ok(());
        };
        let run = BLOCK.repeat((c1 - c0) as usize);

        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&run))?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: TextSize,
        color: Color,
    ) -> std::io::Result<()> {
        let row = self.row_of(y).floor();
        if row < 0.0 || row >= self.rows as f32 {
            return Ok(());
        }
        let col = self.col_of(x).floor().clamp(0.0, (self.cols - 1) as f32) as u16;
        let visible: String = text.chars().take((self.cols - col) as usize).collect();
        let end = col + visible.chars().count() as u16;

        let row = self.free_text_row(row as u16, col, end);
        if row >= self.rows {
            return Ok(());
        }
        self.text_runs.push((row, col, end));

        let bold = matches!(size, TextSize::Large | TextSize::Huge);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetBackgroundColor(term_color(self.background)))?;
        self.out.queue(style::SetForegroundColor(term_color(color)))?;
        if bold {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(visible))?;
        if bold {
            self.out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    fn text_width(&self, text: &str, _size: TextSize) -> f32 {
        text.chars().count() as f32 * self.width / self.cols as f32
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

// ── Terminal session ──────────────────────────────────────────────────────────

/// Terminal modes held for the duration of a game.
///
/// `enter` switches to the alternate screen with a hidden cursor (and raw mode
/// plus key-release reporting when asked).  Dropping the session undoes
/// whatever was switched on, including after a failed `enter`.
pub struct Session<W: Write> {
    out: W,
    raw_mode: bool,
    keyboard_enhanced: bool,
}

impl<W: Write> Session<W> {
    pub fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            terminal::enable_raw_mode()?;
        }
        let mut session = Session {
            out,
            raw_mode,
            keyboard_enhanced: false,
        };

        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;

        // Key-release events need raw mode and a kitty-protocol terminal.
        if raw_mode && terminal::supports_keyboard_enhancement().unwrap_or(false) {
            session.keyboard_enhanced = session
                .out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        }
        Ok(session)
    }

    /// Whether the terminal was asked to report key releases.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        // Best effort: teardown errors are dropped.
        let _ = self.out.flush();
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

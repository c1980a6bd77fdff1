//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The caller keeps one `FrameBuffer`, draws each frame into it, and hands
//! it to [`TerminalRenderer::present`]. Only the cells that changed since
//! the previous frame are sent to the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    queue: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch the terminal into raw, alternate-screen drawing mode.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.flush_queue()
    }

    /// Restore the terminal on the way out.
    pub fn exit(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(ResetColor)?;
        self.queue.queue(SetAttribute(Attribute::Reset))?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the remembered frame so the next present redraws everything.
    ///
    /// Call this on terminal resize events.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Send `fb` to the terminal, diffed against the previous frame.
    ///
    /// The renderer keeps `fb` as the new baseline and hands the old
    /// buffer back through the same slot, so a single caller-owned
    /// framebuffer serves every frame without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        // No baseline means the screen content is unknown, so the first
        // frame after `new` or `invalidate` is always a full redraw.
        let (mut prev, needs_full) = match self.prev.take() {
            Some(prev) => {
                let resized = prev.width() != fb.width() || prev.height() != fb.height();
                (prev, resized)
            }
            None => (FrameBuffer::new(fb.width(), fb.height()), true),
        };

        self.queue.clear();
        if needs_full {
            encode_full_into(fb, &mut self.queue)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, &mut self.queue)?;
        }
        self.flush_queue()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the style most recently queued so a run of same-styled cells
/// costs one escape sequence, not one per cell.
struct StylePen {
    current: Option<CellStyle>,
}

impl StylePen {
    fn new() -> Self {
        Self { current: None }
    }

    fn switch_to(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        // Attribute::Reset clears colors too, so it has to go first.
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

/// Encode a clear-and-redraw of the whole frame into `out`.
///
/// This builds a sequence of crossterm commands without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut pen = StylePen::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            pen.switch_to(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cell runs that differ between `prev` and `next`.
///
/// This builds a sequence of crossterm commands without touching stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = StylePen::new();

    changed_runs(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            pen.switch_to(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Visit every maximal horizontal run of cells that differ between two
/// same-sized frames. A size mismatch degrades to whole-row runs over
/// `next`.
fn changed_runs(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let same = prev.get(x, y) == next.get(x, y);
            match (run_start, same) {
                (None, false) => run_start = Some(x),
                (Some(start), true) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            f(start, y, next.width() - start)?;
        }
    }

    Ok(())
}

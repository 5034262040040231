//! Terminal output for framebuffers.
//!
//! [`TerminalRenderer`] remembers the last frame it sent. A frame of the same
//! size goes out as the runs of cells that changed; any other frame is
//! repainted whole. Style commands are only queued for the parts of a cell
//! style that differ from the previous cell written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.last = None;
        self.flush_buf()
    }

    /// Restore the terminal to the state `enter` found it in.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the last frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Send `fb` to the terminal and keep it as the new reference frame.
    ///
    /// On return `fb` holds a buffer of the same size with stale contents;
    /// callers render the next frame into it.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let stale = match self.last.take() {
            Some(prev) if same_size(&prev, fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.last = Some(std::mem::replace(fb, stale));
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Queue a clear-and-repaint of the whole of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.move_to(0, y)?;
        for x in 0..fb.width() {
            painter.cell(fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Queue only the cells of `next` that differ from `prev`.
///
/// Frames of different sizes cannot be diffed and are repainted in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_size(prev, next) {
        return encode_full_into(next, out);
    }
    let mut painter = Painter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        painter.move_to(x, y)?;
        for dx in 0..len {
            painter.cell(next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Horizontal `(x, y, len)` runs of cells that differ between two
/// same-sized frames, top to bottom and left to right.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

/// Writes cells into a command buffer, tracking the active style.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            self.set_style(cell.style)?;
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn set_style(&mut self, next: CellStyle) -> Result<()> {
        let prev = self.style.replace(next);
        // SGR reset also drops both colours.
        let reset = prev.map_or(true, |p| p.bold != next.bold || p.dim != next.dim);
        if reset {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if next.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if reset || prev.map(|p| p.fg) != Some(next.fg) {
            self.out.queue(SetForegroundColor(color(next.fg)))?;
        }
        if reset || prev.map(|p| p.bg) != Some(next.bg) {
            self.out.queue(SetBackgroundColor(color(next.bg)))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

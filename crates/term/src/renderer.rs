//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Game frames are mostly one background colour. A full redraw clears the
//! screen to that colour and only writes the cells that differ from it; later
//! frames write the runs of cells that changed since the previous one. Colour
//! and intensity escapes are emitted only when the pen actually changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::RAY_WHITE;

/// Clean cells a run may swallow to avoid another cursor move.
///
/// A `MoveTo` costs more bytes than rewriting a few cells, so short gaps
/// between dirty cells (the space in "Press ENTER") stay inside one run.
const MAX_GAP: u16 = 3;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    clear: Rgb,
    /// Set once keyboard enhancement flags were pushed in `enter`.
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            clear: RAY_WHITE,
            key_release_events: false,
        }
    }

    /// Background used when the screen is cleared.
    pub fn with_clear_color(mut self, clear: Rgb) -> Self {
        self.clear = clear;
        self
    }

    pub fn clear_color(&self) -> Rgb {
        self.clear
    }

    /// Switch to raw mode and the alternate screen, cleared to the background.
    ///
    /// When the terminal supports the kitty keyboard protocol, key release
    /// events are requested as well; see [`Self::supports_release_events`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        if self.key_release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(SetBackgroundColor(rgb_to_color(self.clear)))?;
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    pub fn supports_release_events(&self) -> bool {
        self.key_release_events
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.key_release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.key_release_events = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (after a resize, for example).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call it holds the previous frame, ready to be rendered over.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, self.clear, &mut self.buf)?;
                let mut prev =
                    stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full redraw into `out`: clear to `clear`, then paint every cell
/// that would not look blank on that background.
pub fn encode_full_into(fb: &FrameBuffer, clear: Rgb, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetBackgroundColor(rgb_to_color(clear)))?;
    out.queue(terminal::Clear(ClearType::All))?;

    let mut pen = Pen {
        fg: None,
        bg: Some(clear),
        bold: false,
    };
    for_each_dirty_run(
        fb.width(),
        fb.height(),
        |x, y| !is_blank(cell_at(fb, x, y), clear),
        |x, y, len| write_run(out, &mut pen, fb, x, y, len),
    )
}

/// Encode the runs of cells that differ between `prev` and `next` into `out`.
///
/// Identical frames encode to nothing. Frames of different sizes should go
/// through [`encode_full_into`] instead.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for_each_dirty_run(
        next.width(),
        next.height(),
        |x, y| prev.get(x, y) != next.get(x, y),
        |x, y, len| write_run(out, &mut pen, next, x, y, len),
    )
}

/// Terminal colour and intensity state as of the last escape written.
///
/// `None` means unknown, which forces the next colour to be written.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.bold != style.bold {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(attr))?;
            self.bold = style.bold;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }
}

fn write_run(
    out: &mut Vec<u8>,
    pen: &mut Pen,
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for dx in 0..len {
        let cell = cell_at(fb, x + dx, y);
        pen.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn cell_at(fb: &FrameBuffer, x: u16, y: u16) -> Cell {
    fb.get(x, y).unwrap_or_default()
}

/// A space on the clear colour is what `Clear` already left behind.
fn is_blank(cell: Cell, clear: Rgb) -> bool {
    cell.ch == ' ' && cell.style.bg == clear
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each row run of dirty cells, bridging gaps of at
/// most `MAX_GAP` clean cells.
fn for_each_dirty_run(
    width: u16,
    height: u16,
    mut dirty: impl FnMut(u16, u16) -> bool,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for y in 0..height {
        let mut x = 0;
        while x < width {
            if !dirty(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            let mut end = x + 1;
            let mut next = end;
            while next < width && next - end <= MAX_GAP {
                if dirty(next, y) {
                    end = next + 1;
                }
                next += 1;
            }
            f(start, y, end - start)?;
            x = next;
        }
    }
    Ok(())
}

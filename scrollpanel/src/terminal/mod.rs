use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::error::Result;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::Stylesheet;

/// Crossterm backend: raw mode, alternate screen, mouse capture, and a
/// double buffer so each frame only writes the cells that changed.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for input. With `None` blocks for one event; with a timeout
    /// returns whatever arrived, draining everything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        match timeout {
            None => events.push(event::read()?),
            Some(dur) => {
                if event::poll(dur)? {
                    events.push(event::read()?);
                }
            }
        }
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element, stylesheet: &Stylesheet) -> Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            // Force a full repaint: nothing on screen matches an empty buffer
            self.previous_buffer = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer, stylesheet);

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut pen: Option<Cell> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if pen.is_none_or(|p| p.fg != cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
            }
            if pen.is_none_or(|p| p.bg != cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
            }
            if pen.is_none_or(|p| p.style != cell.style) {
                // Reset clears colors too, so re-apply them after it
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                for (on, attribute) in [
                    (cell.style.bold, Attribute::Bold),
                    (cell.style.dim, Attribute::Dim),
                    (cell.style.italic, Attribute::Italic),
                    (cell.style.underline, Attribute::Underlined),
                ] {
                    if on {
                        queue!(self.stdout, SetAttribute(attribute))?;
                    }
                }
            }
            pen = Some(*cell);

            write!(self.stdout, "{}", cell.char)?;
            let advance = char_width(cell.char).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn to_crossterm(rgb: crate::types::Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

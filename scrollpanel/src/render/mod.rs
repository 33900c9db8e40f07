use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, wrap_lines};
use crate::types::{Overflow, Position, Rgb, Style, Stylesheet};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// What an element inherits from its ancestors while painting.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Screen area the element may paint into.
    clip: Rect,
    /// Rows everything in this subtree is shifted up by (sum of ancestor scroll offsets).
    scroll: u16,
    foreground: Rgb,
}

pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    stylesheet: &Stylesheet,
) {
    let frame = Frame {
        clip: Rect::from_size(buf.width(), buf.height()),
        scroll: 0,
        foreground: DEFAULT_FG,
    };
    render_element(element, layout, buf, stylesheet, frame);
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    stylesheet: &Stylesheet,
    frame: Frame,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = stylesheet.resolve(element.class.as_deref(), &element.style);
    let top = rect.y as i32 - frame.scroll as i32;
    let visible = on_screen(*rect, top).intersect(frame.clip);
    let foreground = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(frame.foreground);

    paint_box(&style, visible, foreground, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, &style, *rect, top, frame.clip, foreground, buf);
        }
        Content::Children(children) => {
            let child_frame = if element.overflow == Overflow::Hidden {
                Frame {
                    clip: visible,
                    scroll: frame.scroll.saturating_add(element.scroll_offset),
                    foreground,
                }
            } else {
                Frame {
                    foreground,
                    ..frame
                }
            };

            // Absolute children stack above the flow
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let absolute = children.iter().filter(|c| c.position == Position::Absolute);
            for child in flow.chain(absolute) {
                render_element(child, layout, buf, stylesheet, child_frame);
            }
        }
    }
}

/// Screen rows covered by `rect` once its top is moved to `top`, cut at row 0.
fn on_screen(rect: Rect, top: i32) -> Rect {
    let bottom = top + rect.height as i32;
    let start = top.clamp(0, u16::MAX as i32) as u16;
    let end = bottom.clamp(0, u16::MAX as i32) as u16;
    Rect::new(rect.x, start, rect.width, end.saturating_sub(start))
}

fn paint_box(style: &Style, area: Rect, foreground: Rgb, buf: &mut Buffer) {
    if style.background.is_none() && style.fill.is_none() {
        return;
    }
    let background = style.background.as_ref().map(|c| c.to_rgb());

    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let Some(cell) = buf.get_mut(x, y) else {
                continue;
            };
            if let Some(bg) = background {
                cell.bg = bg;
            }
            if let Some(glyph) = style.fill {
                cell.char = glyph;
                cell.fg = foreground;
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_text(
    text: &str,
    style: &Style,
    rect: Rect,
    top: i32,
    clip: Rect,
    foreground: Rgb,
    buf: &mut Buffer,
) {
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    for (i, line) in wrap_lines(text, rect.width as usize).iter().enumerate() {
        let row = top + i as i32;
        if row < 0 || row >= u16::MAX as i32 {
            continue;
        }
        let y = row as u16;
        if y < clip.y || y >= clip.bottom() || i as u16 >= rect.height {
            continue;
        }

        let mut x = rect.x;
        for ch in line.chars() {
            let w = char_width(ch).max(1) as u16;
            if x.saturating_add(w) > rect.right() {
                break;
            }
            if x >= clip.x && x.saturating_add(w) <= clip.right() {
                // Keep whatever is underneath unless the text has its own background
                let bg = explicit_bg
                    .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());
                buf.set(
                    x,
                    y,
                    Cell::new(ch)
                        .with_fg(foreground)
                        .with_bg(bg)
                        .with_style(style.text_style),
                );
                if w == 2 {
                    if let Some(cell) = buf.get_mut(x + 1, y) {
                        cell.wide_continuation = true;
                        cell.bg = bg;
                    }
                }
            }
            x = x.saturating_add(w);
        }
    }
}

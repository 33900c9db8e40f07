use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::{max_line_width, wrap_lines};
use crate::types::{Direction, Position, Size};

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve(element.width, available.width, || intrinsic_width(element));
    let height = resolve(element.height, available.height, || {
        intrinsic_height(element, width)
    });
    let rect = Rect::new(available.x, available.y, width, height);

    layout_element(element, rect, rect, &mut result);
    result
}

fn resolve(size: Size, available: u16, auto: impl FnOnce() -> u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => auto(),
    }
}

/// Place `element` at `rect` and lay out its children.
///
/// `containing` is the box absolute descendants are positioned against: the
/// nearest ancestor that is not `Position::Static`, or the root.
fn layout_element(element: &Element, rect: Rect, containing: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let containing = if element.position == Position::Static {
        containing
    } else {
        rect
    };

    // Main axis cursor for flow children, and the cross extent for rows
    let mut cursor = 0u16;
    let mut cross_extent = 0u16;

    for child in children {
        if child.position == Position::Absolute {
            let width = resolve(child.width, containing.width, || intrinsic_width(child));
            let height = resolve(child.height, containing.height, || {
                intrinsic_height(child, width)
            });
            let x = containing.x.saturating_add(child.left.unwrap_or(0));
            let y = containing.y.saturating_add(child.top.unwrap_or(0));
            layout_element(child, Rect::new(x, y, width, height), containing, result);
            continue;
        }

        match element.direction {
            Direction::Column => {
                // Auto width text wraps at the column's width
                let width = resolve(child.width, rect.width, || {
                    intrinsic_width(child).min(rect.width)
                });
                let height = resolve(child.height, rect.height.saturating_sub(cursor), || {
                    intrinsic_height(child, width)
                });
                let child_rect = Rect::new(rect.x, rect.y.saturating_add(cursor), width, height);
                layout_element(child, child_rect, containing, result);
                cursor = cursor.saturating_add(height);
            }
            Direction::Row => {
                let width = resolve(child.width, rect.width.saturating_sub(cursor), || {
                    intrinsic_width(child)
                });
                let height = resolve(child.height, rect.height, || {
                    intrinsic_height(child, width)
                });
                let child_rect = Rect::new(rect.x.saturating_add(cursor), rect.y, width, height);
                layout_element(child, child_rect, containing, result);
                cursor = cursor.saturating_add(width);
                cross_extent = cross_extent.max(height);
            }
        }
    }

    let content_height = match element.direction {
        Direction::Column => cursor,
        Direction::Row => cross_extent,
    };
    result.set_scroll_height(&element.id, content_height.max(rect.height));
}

/// Size along one axis when the parent does not dictate it. `Fill` children
/// contribute nothing since they only stretch into space that exists.
fn measured_width(element: &Element) -> u16 {
    match element.width {
        Size::Fixed(n) => n,
        Size::Fill => 0,
        Size::Auto => intrinsic_width(element),
    }
}

fn measured_height(element: &Element, width: u16) -> u16 {
    match element.height {
        Size::Fixed(n) => n,
        Size::Fill => 0,
        Size::Auto => intrinsic_height(element, width),
    }
}

fn intrinsic_width(element: &Element) -> u16 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => max_line_width(text).min(u16::MAX as usize) as u16,
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            match element.direction {
                Direction::Row => flow.map(measured_width).fold(0, u16::saturating_add),
                Direction::Column => flow.map(measured_width).max().unwrap_or(0),
            }
        }
    }
}

fn intrinsic_height(element: &Element, width: u16) -> u16 {
    match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            // An empty string still takes a row, even at zero width
            let lines = wrap_lines(text, width.max(1) as usize).len();
            lines.min(u16::MAX as usize) as u16
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            match element.direction {
                Direction::Column => flow
                    .map(|c| {
                        let child_width = match c.width {
                            Size::Fixed(n) => n,
                            Size::Fill => width,
                            Size::Auto => intrinsic_width(c).min(width),
                        };
                        measured_height(c, child_width)
                    })
                    .fold(0, u16::saturating_add),
                Direction::Row => flow
                    .map(|c| measured_height(c, measured_width(c)))
                    .max()
                    .unwrap_or(0),
            }
        }
    }
}

use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::types::{Overflow, Position};

/// Ids of every element under the point, deepest first, root last.
///
/// Scroll offsets of clipping containers are honored: a child scrolled out
/// of its container's box cannot be hit, and rows inside the box map to the
/// child that is actually drawn there. Returns an empty path when the point
/// is outside the root.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut path = Vec::new();
    hit_element(layout, root, x, y as u32, &mut path);
    path.reverse();
    path
}

/// `y` is in layout coordinates, i.e. already offset by ancestor scrolling.
fn hit_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u32,
    path: &mut Vec<String>,
) -> bool {
    let Some(rect) = layout.get(&element.id) else {
        return false;
    };
    if y > u16::MAX as u32 || !rect.contains(x, y as u16) {
        return false;
    }

    path.push(element.id.clone());

    if let Content::Children(children) = &element.content {
        let child_y = if element.overflow == Overflow::Hidden {
            y + element.scroll_offset as u32
        } else {
            y
        };

        // Absolute children are painted last, so they are on top
        let flow = children.iter().filter(|c| c.position != Position::Absolute);
        let absolute = children.iter().filter(|c| c.position == Position::Absolute);
        let on_top: Vec<&Element> = flow.chain(absolute).collect();
        for child in on_top.into_iter().rev() {
            if hit_element(layout, child, x, child_y, path) {
                break;
            }
        }
    }

    true
}

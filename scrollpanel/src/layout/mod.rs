mod flex;
mod rect;

use std::collections::HashMap;

pub use flex::layout;
pub use rect::Rect;

/// Positions computed by [`layout`], keyed by element id.
///
/// Rects are in unscrolled coordinates: children of a scrolled container are
/// placed as if its scroll offset were zero, render and hit testing apply the
/// offset.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    /// Height of each container's content, never less than its own height.
    scroll_heights: HashMap<String, u16>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn set_scroll_height(&mut self, id: &str, height: u16) {
        self.scroll_heights.insert(id.to_string(), height);
    }

    /// Scroll height of a container, the way a browser reports `scrollHeight`.
    pub fn scroll_height(&self, id: &str) -> Option<u16> {
        self.scroll_heights.get(id).copied()
    }
}

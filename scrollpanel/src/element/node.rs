use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Overflow, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub direction: Direction,

    // Positioning, offsets are relative to the nearest positioned ancestor
    pub position: Position,
    pub top: Option<u16>,
    pub left: Option<u16>,

    pub overflow: Overflow,
    /// Rows the children are shifted up by. Only meaningful with `Overflow::Hidden`.
    pub scroll_offset: u16,

    // Visual
    pub class: Option<String>,
    pub style: Style,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            direction: Direction::Column,
            position: Position::Static,
            top: None,
            left: None,
            overflow: Overflow::Visible,
            scroll_offset: 0,
            class: None,
            style: Style::default(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: u16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: u16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn scroll_offset(mut self, rows: u16) -> Self {
        self.scroll_offset = rows;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the class only when one is given; convenient for optional overrides.
    pub fn maybe_class(mut self, class: Option<&str>) -> Self {
        self.class = class.map(str::to_string);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}

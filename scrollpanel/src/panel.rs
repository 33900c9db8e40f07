//! The scroll panel element: a clipped content box beside a track and thumb.

use crate::config::PanelConfig;
use crate::element::Element;
use crate::listeners::Target;
use crate::sync::ScrollPosition;
use crate::types::{Color, Overflow, Position, Size, Style};

/// Ids of the rendered boxes the synchronizer works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHandles {
    pub content: String,
    pub track: String,
    pub thumb: String,
}

impl PanelHandles {
    pub fn new(panel_id: &str) -> Self {
        Self {
            content: format!("{panel_id}-content"),
            track: format!("{panel_id}-track"),
            thumb: format!("{panel_id}-thumb"),
        }
    }

    /// Listener targets for a hit path: the thumb and content box when the
    /// path goes through them, then always the document.
    pub fn targets(&self, path: &[String]) -> Vec<Target> {
        let mut targets = Vec::with_capacity(3);
        if path.iter().any(|id| *id == self.thumb) {
            targets.push(Target::Thumb);
        }
        if path.iter().any(|id| *id == self.content) {
            targets.push(Target::Content);
        }
        targets.push(Target::Document);
        targets
    }
}

fn default_track_style() -> Style {
    Style::new().background(Color::rgb(0, 0, 0))
}

fn default_thumb_style() -> Style {
    Style::new().background(Color::rgb(0, 128, 0))
}

/// Builder for the panel element tree.
///
/// # Example
///
/// ```ignore
/// let panel = Panel::new("log")
///     .config(PanelConfig::new().width(40).height(10).bar_width(1).bar_height(3))
///     .children(lines.iter().map(|l| Element::text(l.as_str())));
///
/// let root = panel.build(handle.position());
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    config: PanelConfig,
    children: Vec<Element>,
}

impl Panel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: PanelConfig::default(),
            children: Vec::new(),
        }
    }

    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn panel_config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn handles(&self) -> PanelHandles {
        PanelHandles::new(&self.id)
    }

    /// Build the element tree with the content scrolled to `position`.
    ///
    /// Offsets are rounded to whole rows. `ScrollPosition::default()` gives
    /// the initial render: content at the top, thumb at offset 0.
    pub fn build(&self, position: ScrollPosition) -> Element {
        let handles = self.handles();
        let cfg = &self.config;

        let content = Element::col()
            .id(handles.content)
            .width(Size::Fixed(cfg.width))
            .height(Size::Fixed(cfg.height))
            .overflow(Overflow::Hidden)
            .scroll_offset(to_rows(position.content_offset))
            .maybe_class(cfg.content_class.as_deref())
            .style(cfg.content_style.clone())
            .children(self.children.iter().cloned());

        let thumb = Element::box_()
            .id(handles.thumb)
            .position(Position::Absolute)
            .top(to_rows(position.thumb_offset))
            .left(0)
            .width(Size::Fill)
            .height(Size::Fixed(cfg.bar_height))
            .maybe_class(cfg.bar_class.as_deref())
            .style(default_thumb_style().merge(&cfg.bar_style));

        let track = Element::box_()
            .id(handles.track)
            .position(Position::Relative)
            .width(Size::Fixed(cfg.bar_width))
            .height(Size::Fill)
            .maybe_class(cfg.track_class.as_deref())
            .style(default_track_style().merge(&cfg.track_style))
            .child(thumb);

        Element::row().id(self.id.clone()).child(content).child(track)
    }
}

fn to_rows(offset: f32) -> u16 {
    offset.round().clamp(0.0, u16::MAX as f32) as u16
}

use serde::Deserialize;

use crate::types::Style;

/// Caller-facing configuration of a scroll panel.
///
/// Sizes are in the host's units (cells for the terminal host). Nothing is
/// validated: zero or oversized values are rendered as given, and the
/// synchronizer treats the resulting degenerate geometry as not scrollable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Content box width.
    pub width: u16,
    /// Content box height, which is also the viewport height.
    pub height: u16,
    /// Track width.
    pub bar_width: u16,
    /// Thumb height.
    pub bar_height: u16,
    /// Content units scrolled per line of line-based wheel input.
    pub wheel_step: f32,

    pub bar_style: Style,
    pub bar_class: Option<String>,
    pub track_style: Style,
    pub track_class: Option<String>,
    pub content_style: Style,
    pub content_class: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            bar_width: 20,
            bar_height: 50,
            wheel_step: 3.0,
            bar_style: Style::default(),
            bar_class: None,
            track_style: Style::default(),
            track_class: None,
            content_style: Style::default(),
            content_class: None,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn bar_width(mut self, bar_width: u16) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub fn bar_height(mut self, bar_height: u16) -> Self {
        self.bar_height = bar_height;
        self
    }

    pub fn wheel_step(mut self, step: f32) -> Self {
        self.wheel_step = step;
        self
    }

    pub fn bar_style(mut self, style: Style) -> Self {
        self.bar_style = style;
        self
    }

    pub fn bar_class(mut self, class: impl Into<String>) -> Self {
        self.bar_class = Some(class.into());
        self
    }

    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }

    pub fn track_class(mut self, class: impl Into<String>) -> Self {
        self.track_class = Some(class.into());
        self
    }

    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = style;
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = Some(class.into());
        self
    }
}

use serde::Deserialize;

use super::{Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    /// Glyph painted across every cell of the box.
    pub fill: Option<char>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn fill(mut self, glyph: char) -> Self {
        self.fill = Some(glyph);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `over` on top of `self`. Every property `over` sets wins.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            background: over.background.clone().or_else(|| self.background.clone()),
            foreground: over.foreground.clone().or_else(|| self.foreground.clone()),
            fill: over.fill.or(self.fill),
            text_style: self.text_style.union(over.text_style),
        }
    }
}

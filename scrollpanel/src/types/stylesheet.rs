use std::collections::HashMap;

use serde::Deserialize;

use super::Style;

/// Named styles that elements refer to through their `class`.
///
/// The terminal counterpart of a CSS stylesheet: a class only provides a
/// base layer, the element's inline style is merged on top of it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
    classes: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, name: impl Into<String>, style: Style) -> Self {
        self.classes.insert(name.into(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Effective style of a box: class layer first, inline style on top.
    /// Unknown class names resolve to the inline style alone.
    pub fn resolve(&self, class: Option<&str>, inline: &Style) -> Style {
        match class.and_then(|name| self.get(name)) {
            Some(base) => base.merge(inline),
            None => inline.clone(),
        }
    }
}

use std::collections::BTreeSet;

/// Class that suppresses text selection while present on the document.
pub const UNSELECTABLE: &str = "unselectable";

/// Document-wide state shared by everything on screen.
///
/// Holds the classes set on the document body. The host decides what each
/// class means; [`UNSELECTABLE`] tells it to stop treating pointer drags as
/// text selection.
#[derive(Debug, Default)]
pub struct Document {
    classes: BTreeSet<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the class was not present before.
    pub fn add_class(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_string())
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_selectable(&self) -> bool {
        !self.has_class(UNSELECTABLE)
    }
}

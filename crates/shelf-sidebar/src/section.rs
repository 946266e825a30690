//! Sidebar entries.
//!
//! Serialized field names follow the framework's sidebar schema:
//! sections are `{text, items, collapsible, collapsed}` and leaves are
//! `{text, link}`.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// Navigation group for one topic directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Directory base name, used as the display label.
    pub name: String,
    /// Articles in filesystem listing order.
    pub items: Vec<Leaf>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Sections can always be folded by the reader.
    pub const COLLAPSIBLE: bool = true;

    /// Sections always start expanded.
    pub const COLLAPSED: bool = false;
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Section", 4)?;
        state.serialize_field("text", &self.name)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("collapsible", &Self::COLLAPSIBLE)?;
        state.serialize_field("collapsed", &Self::COLLAPSED)?;
        state.end()
    }
}

/// Single article link inside a [`Section`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leaf {
    /// File name without the content extension.
    #[serde(rename = "text")]
    pub label: String,
    /// Route the framework serves the article at.
    #[serde(rename = "link")]
    pub path: String,
}

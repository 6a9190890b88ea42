// file: src/models/anchor.rs
// description: heading anchors and their rendered positions
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A navigable heading inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub title: String,
    pub id: String,
    pub level: u8,
}

impl Anchor {
    pub fn fragment(&self) -> String {
        format!("#{}", self.id)
    }

    /// Indentation depth relative to the shallowest supported level (h2).
    pub fn depth(&self) -> usize {
        usize::from(self.level.saturating_sub(2))
    }
}

/// A rendered heading element as reported by the host: its id and vertical
/// offset from the top of the document, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    pub id: String,
    pub top: f64,
}

impl HeadingPosition {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Emitted when the active section actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<String>,
    pub current: Option<String>,
}

// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod anchor;
pub mod document;
pub mod search_result;

pub use anchor::{ActiveChange, Anchor, HeadingPosition};
pub use document::{Document, IndexRecord, SearchIndex};
pub use search_result::{MatchGroup, SearchMatch, SearchOutcome};

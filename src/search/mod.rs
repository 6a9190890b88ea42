// file: src/search/mod.rs
// description: client-side search runtime module exports
// reference: internal module structure

pub mod palette;
pub mod runtime;
pub mod source;

pub use palette::{KeyCombo, KeyEvent, KeyHandling, NavigationRequest, SearchPalette};
pub use runtime::{LoadState, SearchRuntime};
pub use source::{FileIndexSource, HttpIndexSource, IndexLocation, IndexSource, StaticIndexSource};

// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod content;
pub mod error;
pub mod exporter;
pub mod models;
pub mod navigation;
pub mod parser;
pub mod pipeline;
pub mod search;
pub mod utils;

pub use config::{Config, ContentConfig, IndexConfig, NavigationConfig, SearchConfig};
pub use content::{ContentStore, FileScanner, ScannedFile};
pub use error::{IndexError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use models::{
    ActiveChange, Anchor, Document, HeadingPosition, IndexRecord, SearchIndex, SearchMatch,
    SearchOutcome,
};
pub use navigation::{DocumentView, ScrollSpy, ViewState};
pub use parser::{HeadingExtractor, MarkdownNormalizer, generate_heading_id};
pub use pipeline::{BuildReport, BuildStats, IndexBuilder, ProgressTracker};
pub use search::{IndexLocation, IndexSource, SearchPalette, SearchRuntime};
pub use utils::Validator;

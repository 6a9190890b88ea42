// file: src/parser/mod.rs
// description: markdown parsing module exports
// reference: internal module structure

pub mod headings;
pub mod normalizer;
pub mod patterns;

pub use headings::{HeadingExtractor, generate_heading_id};
pub use normalizer::{FALLBACK_TITLE, MarkdownNormalizer};

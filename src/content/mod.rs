// file: src/content/mod.rs
// description: content tree discovery module exports
// reference: internal module structure

pub mod scanner;
pub mod store;

pub use scanner::{FileScanner, ScannedFile, read_content, relative_path_for, route_for};
pub use store::ContentStore;

// file: src/content/store.rs
// description: read-only route to markdown lookup table built once at startup
// reference: internal data structures

use crate::content::scanner::{FileScanner, read_content};
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Route → raw Markdown. Never mutated after construction; hand it out by reference.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    documents: HashMap<String, String>,
}

impl ContentStore {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            documents: entries
                .into_iter()
                .map(|(route, body)| (route.into(), body.into()))
                .collect(),
        }
    }

    pub fn from_directory(scanner: &FileScanner, root: &Path) -> Result<Self> {
        let files = scanner.scan_directory(root)?;
        let mut documents = HashMap::with_capacity(files.len());

        for file in files {
            let body = read_content(&file.path)?;
            documents.insert(file.route, body);
        }

        info!("Loaded {} documents into content store", documents.len());
        Ok(Self { documents })
    }

    pub fn get(&self, route: &str) -> Option<&str> {
        self.documents.get(route).map(String::as_str)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.documents.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }
}

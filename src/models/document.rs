// file: src/models/document.rs
// description: core document model and the serialized search index records
// reference: internal data structures

use crate::error::{IndexError, Result};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// One content file, as read by the index builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source_path: PathBuf,
    /// Route of the document: root-relative path without extension, leading `/`.
    pub path: String,
    pub title: String,
    pub raw_body: String,
    pub plain_body: String,
}

impl Document {
    pub fn to_record(&self) -> IndexRecord {
        IndexRecord {
            id: self.path.clone(),
            title: self.title.clone(),
            path: self.path.clone(),
            content: self.plain_body.clone(),
        }
    }
}

/// One entry of the published search index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub id: String,
    pub title: String,
    pub path: String,
    pub content: String,
}

/// Read-only, loaded search index. Paths are unique.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<IndexRecord>,
}

impl SearchIndex {
    pub fn new(records: Vec<IndexRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            Validator::validate_route(&record.path)?;
            if !seen.insert(record.path.as_str()) {
                return Err(IndexError::Validation(format!(
                    "search index contains duplicate path {}",
                    record.path
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&IndexRecord> {
        self.records.iter().find(|record| record.path == path)
    }
}

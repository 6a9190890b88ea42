// file: src/pipeline/builder.rs
// description: builds the search index artifact from the content tree in one fail-fast pass
// reference: orchestrates scanning, normalization and json export

use crate::config::Config;
use crate::content::{FileScanner, ScannedFile, read_content};
use crate::error::{IndexError, Result};
use crate::exporter::{ExportManifest, JsonExporter};
use crate::models::{Document, IndexRecord};
use crate::parser::MarkdownNormalizer;
use crate::pipeline::progress::{BuildStats, ProgressTracker};
use crate::utils::Validator;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct IndexBuilder {
    config: Config,
    scanner: FileScanner,
    normalizer: MarkdownNormalizer,
    show_progress: bool,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub manifest: ExportManifest,
    pub stats: BuildStats,
}

impl IndexBuilder {
    pub fn new(config: Config) -> Self {
        let scanner = FileScanner::new(config.content.clone());
        let normalizer = MarkdownNormalizer::with_fallback_title(config.index.fallback_title.clone());

        Self {
            config,
            scanner,
            normalizer,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Scan the configured content root, build every document and write the artifact.
    pub fn run(&self) -> Result<BuildReport> {
        let root = self.config.content.root.clone();
        let (documents, stats) = self.build_with_stats(&root)?;

        let records: Vec<IndexRecord> = documents.iter().map(Document::to_record).collect();

        let exporter = JsonExporter::new(&self.config.index.output_path);
        let manifest = exporter.write_index(
            &records,
            self.config.index.pretty,
            self.config.index.write_manifest,
        )?;

        Ok(BuildReport {
            output_path: exporter.output_path().to_path_buf(),
            manifest,
            stats,
        })
    }

    pub fn build(&self, root: &Path) -> Result<Vec<Document>> {
        self.build_with_stats(root).map(|(documents, _)| documents)
    }

    fn build_with_stats(&self, root: &Path) -> Result<(Vec<Document>, BuildStats)> {
        let files = self.scanner.scan_directory(root)?;

        if files.is_empty() {
            warn!("No content files found under {}", root.display());
        }

        let progress = if self.show_progress {
            ProgressTracker::new(files.len())
        } else {
            ProgressTracker::hidden(files.len())
        };

        let mut documents = Vec::with_capacity(files.len());
        let mut seen: HashMap<String, PathBuf> = HashMap::with_capacity(files.len());

        for file in &files {
            progress.set_message(file.relative_path.clone());
            Validator::validate_route(&file.route)?;

            if let Some(first) = seen.get(&file.route) {
                return Err(IndexError::DuplicatePath {
                    route: file.route.clone(),
                    first: first.clone(),
                    second: file.path.clone(),
                });
            }

            let document = self.read_document(file, &progress)?;
            seen.insert(document.path.clone(), file.path.clone());
            documents.push(document);
            progress.inc_files_indexed();
        }

        let stats = progress.get_stats();
        progress.finish();

        info!(
            "Indexed {} documents ({} truncated, {} untitled) in {} ms",
            stats.files_indexed, stats.documents_truncated, stats.untitled_documents, stats.duration_ms
        );

        Ok((documents, stats))
    }

    fn read_document(&self, file: &ScannedFile, progress: &ProgressTracker) -> Result<Document> {
        let raw_body = read_content(&file.path)?;
        progress.add_bytes_read(raw_body.len() as u64);

        let title = self.normalizer.extract_title(&raw_body);
        if title == self.config.index.fallback_title {
            debug!("No top-level heading in {}", file.relative_path);
            progress.inc_untitled();
        }

        let normalized = self.normalizer.normalize(&raw_body);
        let plain_body =
            MarkdownNormalizer::truncate(&normalized, self.config.index.max_content_chars)
                .to_string();
        if plain_body.len() < normalized.len() {
            progress.inc_truncated();
        }

        Ok(Document {
            source_path: file.path.clone(),
            path: file.route.clone(),
            title,
            raw_body,
            plain_body,
        })
    }
}

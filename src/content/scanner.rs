// file: src/content/scanner.rs
// description: Directory walking and content file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::ContentConfig;
use crate::error::{IndexError, Result};
use crate::utils::Validator;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct FileScanner {
    config: ContentConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Root-relative path with `/` separators, extension included.
    pub relative_path: String,
    pub route: String,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    pub fn extension(&self) -> &str {
        &self.config.extension
    }

    /// Depth-first walk of `root`. The first traversal error aborts the scan.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        info!("Scanning directory: {}", root.display());
        Validator::validate_directory(root)?;

        let mut walker = WalkDir::new(root).follow_links(false);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();

        for entry in walker {
            let entry = entry.map_err(|e| IndexError::Traversal {
                path: e.path().unwrap_or(root).to_path_buf(),
                message: e.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if !Validator::has_extension(path, &self.config.extension) {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            let relative_path = join_components(relative);

            if self.should_skip(&relative_path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            let size = entry
                .metadata()
                .map_err(|e| IndexError::Traversal {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
                .len();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                route: route_for(relative, &self.config.extension),
                relative_path,
                size,
            });
        }

        info!("Found {} content files", files.len());
        Ok(files)
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        let segments: Vec<&str> = relative_path.split('/').collect();
        let Some((file_name, directories)) = segments.split_last() else {
            return false;
        };

        self.config.skip_patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                file_name.ends_with(suffix)
            } else if let Some(directory) = pattern.strip_suffix('/') {
                directories.contains(&directory)
            } else {
                segments.contains(&pattern.as_str())
            }
        })
    }
}

fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Reads a content file as text. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD; only I/O failures are errors.
pub fn read_content(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| IndexError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Route of a content file: `/` + root-relative path with the extension removed.
pub fn route_for(relative_path: &Path, extension: &str) -> String {
    let joined = join_components(relative_path);
    let suffix = format!(".{}", extension);
    let stem = joined.strip_suffix(&suffix).unwrap_or(&joined);
    format!("/{}", stem)
}

/// Inverse of [`route_for`]: the root-relative file path a route was derived from.
pub fn relative_path_for(route: &str, extension: &str) -> PathBuf {
    let mut path: PathBuf = route
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) {
        path.set_file_name(format!("{}.{}", name, extension));
    }

    path
}

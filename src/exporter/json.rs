// file: src/exporter/json.rs
// description: json export of the search index artifact and its manifest

use crate::error::{IndexError, Result};
use crate::models::IndexRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub artifact: String,
    pub sha256: String,
    pub bytes: usize,
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn manifest_path(&self) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "search-index".to_string());
        self.output_path.with_file_name(format!("{}.manifest.json", stem))
    }

    /// Writes the whole index in one go. Artifact and manifest are staged to temp
    /// files first and the artifact is renamed into place last, so a failed export
    /// never leaves a partial or new-but-unreported artifact behind.
    pub fn write_index(
        &self,
        records: &[IndexRecord],
        pretty: bool,
        with_manifest: bool,
    ) -> Result<ExportManifest> {
        info!("Writing search index to {}", self.output_path.display());

        let bytes = if pretty {
            serde_json::to_vec_pretty(records)?
        } else {
            serde_json::to_vec(records)?
        };

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: records.len(),
            artifact: self
                .output_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            sha256: digest(&bytes),
            bytes: bytes.len(),
        };

        self.ensure_parent_dir()?;
        let staged_artifact = stage(&self.output_path, &bytes)?;

        if with_manifest {
            let manifest_path = self.manifest_path();
            let committed = serde_json::to_vec_pretty(&manifest)
                .map_err(IndexError::from)
                .and_then(|manifest_bytes| stage(&manifest_path, &manifest_bytes))
                .and_then(|staged| commit(&staged, &manifest_path));

            if let Err(e) = committed {
                discard(&staged_artifact);
                return Err(e);
            }
            debug!("Wrote manifest {}", manifest_path.display());
        }

        commit(&staged_artifact, &self.output_path)?;

        info!(
            "Export complete: {} documents, {} bytes",
            manifest.total_documents, manifest.bytes
        );
        Ok(manifest)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| IndexError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn staging_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.tmp", file_name))
}

fn stage(target: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let temp_path = staging_path(target);
    if let Err(source) = fs::write(&temp_path, bytes) {
        discard(&temp_path);
        return Err(IndexError::Write {
            path: temp_path,
            source,
        });
    }
    Ok(temp_path)
}

fn commit(temp_path: &Path, target: &Path) -> Result<()> {
    fs::rename(temp_path, target).map_err(|source| {
        discard(temp_path);
        IndexError::Write {
            path: target.to_path_buf(),
            source,
        }
    })
}

fn discard(temp_path: &Path) {
    if temp_path.exists() && fs::remove_file(temp_path).is_err() {
        warn!("Could not remove staging file {}", temp_path.display());
    }
}

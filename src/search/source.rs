// file: src/search/source.rs
// description: sources the search runtime fetches the index artifact from
// reference: https://docs.rs/reqwest

use crate::error::{IndexError, Result};
use crate::models::IndexRecord;
use crate::utils::Validator;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// Anything that can produce the published index records once.
pub trait IndexSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<IndexRecord>>> + Send;

    fn describe(&self) -> String;
}

/// Reads the artifact from the local build output.
#[derive(Debug, Clone)]
pub struct FileIndexSource {
    path: PathBuf,
}

impl FileIndexSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexSource for FileIndexSource {
    async fn fetch(&self) -> Result<Vec<IndexRecord>> {
        debug!("Reading search index from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| IndexError::Load(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| IndexError::Load(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Plain GET of the statically served artifact.
#[derive(Debug, Clone)]
pub struct HttpIndexSource {
    client: reqwest::Client,
    url: String,
}

impl HttpIndexSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl IndexSource for HttpIndexSource {
    async fn fetch(&self) -> Result<Vec<IndexRecord>> {
        debug!("Fetching search index from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| IndexError::Load(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Load(format!(
                "{} responded with {}",
                self.url, status
            )));
        }

        response
            .json::<Vec<IndexRecord>>()
            .await
            .map_err(|e| IndexError::Load(format!("invalid index from {}: {}", self.url, e)))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory records or a canned failure; used by embedding hosts and tests.
#[derive(Debug, Clone)]
pub struct StaticIndexSource {
    outcome: std::result::Result<Vec<IndexRecord>, String>,
}

impl StaticIndexSource {
    pub fn new(records: Vec<IndexRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl IndexSource for StaticIndexSource {
    async fn fetch(&self) -> Result<Vec<IndexRecord>> {
        self.outcome.clone().map_err(IndexError::Load)
    }

    fn describe(&self) -> String {
        "in-memory index".to_string()
    }
}

/// A configured artifact location: http(s) URLs are fetched, anything else is a file path.
#[derive(Debug, Clone)]
pub enum IndexLocation {
    File(FileIndexSource),
    Http(HttpIndexSource),
}

impl IndexLocation {
    pub fn parse(location: &str) -> Self {
        if Validator::is_remote_location(location) {
            IndexLocation::Http(HttpIndexSource::new(location))
        } else {
            IndexLocation::File(FileIndexSource::new(location))
        }
    }
}

impl IndexSource for IndexLocation {
    async fn fetch(&self) -> Result<Vec<IndexRecord>> {
        match self {
            IndexLocation::File(source) => source.fetch().await,
            IndexLocation::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            IndexLocation::File(source) => source.describe(),
            IndexLocation::Http(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_source_reads_artifact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search-index.json");
        fs::write(
            &path,
            r#"[{"id":"/a","title":"A","path":"/a","content":"alpha"}]"#,
        )
        .unwrap();

        let records = FileIndexSource::new(&path).fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "alpha");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let result = FileIndexSource::new("/nonexistent/search-index.json").fetch().await;
        assert!(matches!(result, Err(IndexError::Load(_))));
    }

    #[tokio::test]
    async fn test_file_source_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("search-index.json");
        fs::write(&path, "{not json").unwrap();

        assert!(FileIndexSource::new(&path).fetch().await.is_err());
    }

    #[test]
    fn test_location_parse() {
        assert!(matches!(
            IndexLocation::parse("https://docs.example.com/search-index.json"),
            IndexLocation::Http(_)
        ));
        assert!(matches!(
            IndexLocation::parse("public/search-index.json"),
            IndexLocation::File(_)
        ));
    }

    #[test]
    fn test_static_source_failure() {
        let result = tokio_test::block_on(StaticIndexSource::failing("offline").fetch());
        assert!(matches!(result, Err(IndexError::Load(msg)) if msg == "offline"));
    }
}

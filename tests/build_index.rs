// file: tests/build_index.rs
// description: end-to-end build of a content tree followed by search over the artifact

use docs_index::content::relative_path_for;
use docs_index::search::{FileIndexSource, LoadState};
use docs_index::{Config, IndexBuilder, IndexRecord, SearchOutcome, SearchRuntime};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn site() -> (TempDir, Config) {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("content");

    write(&content, "index.md", "# Welcome\n\nStart here.\n");
    write(
        &content,
        "guides/setup.md",
        "# Setup\n\nSome **bold** and `code` text. ![img](x) [link](y)\n\n## Install\n\nRun the installer.\n",
    );
    write(&content, "api/events.md", "# Events API\n\nList and filter events.\n");
    write(&content, "notes.txt", "not indexed");
    write(&content, "node_modules/pkg/readme.md", "# Vendored\n");
    write(&content, "drafts/wip.md", "# Work in progress\n");

    let mut config = Config::default_config();
    config.content.root = content;
    config.content.skip_patterns = vec!["drafts/".to_string()];
    config.index.output_path = temp.path().join("public").join("search-index.json");

    (temp, config)
}

fn read_artifact(config: &Config) -> Vec<IndexRecord> {
    let bytes = fs::read(&config.index.output_path).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_one_record_per_markdown_file() {
    let (_temp, config) = site();
    let report = IndexBuilder::new(config.clone()).run().unwrap();

    let records = read_artifact(&config);
    assert_eq!(records.len(), 4);
    assert_eq!(report.manifest.total_documents, 4);

    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/api/events", "/guides/setup", "/index", "/node_modules/pkg/readme"]
    );

    for record in &records {
        assert_eq!(record.id, record.path);
        let source = relative_path_for(&record.path, "md");
        assert!(config.content.root.join(source).is_file());
    }
}

#[test]
fn test_records_are_normalized() {
    let (_temp, config) = site();
    IndexBuilder::new(config.clone()).run().unwrap();

    let records = read_artifact(&config);
    let setup = records.iter().find(|r| r.path == "/guides/setup").unwrap();

    assert_eq!(setup.title, "Setup");
    assert_eq!(setup.content, "Some bold and code text. link\nRun the installer.");
}

#[test]
fn test_manifest_written_next_to_artifact() {
    let (_temp, config) = site();
    let report = IndexBuilder::new(config.clone()).run().unwrap();

    let manifest_path = config
        .index
        .output_path
        .with_file_name("search-index.manifest.json");
    assert!(manifest_path.is_file());
    assert_eq!(report.manifest.artifact, "search-index.json");
    assert_eq!(report.manifest.sha256.len(), 64);
}

#[tokio::test]
async fn test_search_over_built_artifact() {
    let (_temp, config) = site();
    IndexBuilder::new(config.clone()).run().unwrap();

    let mut runtime = SearchRuntime::new(&config.search);
    let source = FileIndexSource::new(&config.index.output_path);
    assert!(matches!(runtime.load(&source).await, LoadState::Ready(_)));

    let outcome = runtime.query("Events API");
    assert!(outcome.contains_path("/api/events"));
    assert_eq!(outcome.matches().len(), 1);

    let outcome = runtime.query("kubernetes");
    assert_eq!(outcome, SearchOutcome::NoMatches);

    assert_eq!(runtime.query("").matches().len(), 4);
}

#[tokio::test]
async fn test_missing_artifact_fails_load() {
    let temp = TempDir::new().unwrap();
    let config = Config::default_config();

    let mut runtime = SearchRuntime::new(&config.search);
    let source = FileIndexSource::new(temp.path().join("absent.json"));

    assert!(matches!(runtime.load(&source).await, LoadState::Failed(_)));
    assert!(matches!(runtime.query("anything"), SearchOutcome::Failed(_)));
}

// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{IndexError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub content: ContentConfig,
    pub index: IndexConfig,
    pub search: SearchConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub root: PathBuf,
    /// File extension (without the dot) of indexed documents.
    pub extension: String,
    /// Opt-in exclusions: `*.suffix` globs, or names matched against whole path segments
    /// (`drafts/` only matches directories). Empty by default.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    /// Sort directory entries by name so repeated builds produce identical artifacts.
    #[serde(default = "default_true")]
    pub sort_entries: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    pub output_path: PathBuf,
    pub max_content_chars: usize,
    pub fallback_title: String,
    #[serde(default = "default_true")]
    pub write_manifest: bool,
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Where the runtime fetches the artifact from: a file path or an http(s) URL.
    pub index_location: String,
    pub match_prefix_chars: usize,
    pub group_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub heading_selector: String,
    pub header_offset_px: f64,
    pub throttle_ms: u64,
    pub top_threshold_px: f64,
    pub boundary_tolerance_px: f64,
    pub not_found_body: String,
}

fn default_true() -> bool {
    true
}

impl NavigationConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            heading_selector: "h2[id], h3[id], h4[id]".to_string(),
            header_offset_px: 100.0,
            throttle_ms: 150,
            top_threshold_px: 50.0,
            boundary_tolerance_px: 5.0,
            not_found_body: "# Not Found\n\nThe requested document could not be found."
                .to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_location: "public/search-index.json".to_string(),
            match_prefix_chars: 100,
            group_label: "Documentation".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOCS_INDEX")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| IndexError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            content: ContentConfig {
                root: PathBuf::from("content"),
                extension: "md".to_string(),
                skip_patterns: Vec::new(),
                sort_entries: true,
            },
            index: IndexConfig {
                output_path: PathBuf::from("public/search-index.json"),
                max_content_chars: 2000,
                fallback_title: "Untitled".to_string(),
                write_manifest: true,
                pretty: false,
            },
            search: SearchConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let extension = self.content.extension.trim();
        if extension.is_empty() || extension.starts_with('.') {
            return Err(IndexError::Config(
                "content.extension must be a bare extension such as \"md\"".to_string(),
            ));
        }

        if self.index.max_content_chars == 0 {
            return Err(IndexError::Config(
                "max_content_chars must be greater than 0".to_string(),
            ));
        }

        if self.index.fallback_title.trim().is_empty() {
            return Err(IndexError::Config(
                "fallback_title must not be empty".to_string(),
            ));
        }

        if self.search.match_prefix_chars == 0 {
            return Err(IndexError::Config(
                "match_prefix_chars must be greater than 0".to_string(),
            ));
        }

        if self.navigation.header_offset_px < 0.0 || self.navigation.top_threshold_px < 0.0 {
            return Err(IndexError::Config(
                "navigation offsets must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.index.max_content_chars, 2000);
        assert_eq!(config.search.match_prefix_chars, 100);
        assert_eq!(config.navigation.throttle(), Duration::from_millis(150));
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let mut config = Config::default_config();
        config.content.extension = ".md".to_string();
        assert!(matches!(config.validate(), Err(IndexError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(
            &path,
            r#"
[content]
root = "guides"
extension = "markdown"

[index]
output_path = "dist/index.json"
max_content_chars = 500
fallback_title = "Untitled"

[search]
index_location = "https://docs.example.com/search-index.json"
match_prefix_chars = 80
group_label = "Docs"

[navigation]
heading_selector = "h2[id]"
header_offset_px = 64.0
throttle_ms = 100
top_threshold_px = 40.0
boundary_tolerance_px = 4.0
not_found_body = "missing"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.content.root, PathBuf::from("guides"));
        assert!(config.content.sort_entries);
        assert!(config.index.write_manifest);
        assert_eq!(config.index.max_content_chars, 500);
        assert_eq!(config.navigation.header_offset_px, 64.0);
    }
}

// file: src/search/runtime.rs
// description: loads the search index once per session and resolves queries against it
// reference: client-side search over the published index artifact

use crate::config::SearchConfig;
use crate::models::{MatchGroup, SearchIndex, SearchMatch, SearchOutcome};
use crate::search::source::IndexSource;
use crate::utils::Validator;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(SearchIndex),
    Failed(String),
}

pub struct SearchRuntime {
    state: LoadState,
    load_started: bool,
    /// Lowercased `title + opening slice of content`, one per record, built at load time.
    haystacks: Vec<String>,
    match_prefix_chars: usize,
    group_label: String,
}

impl SearchRuntime {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            state: LoadState::Loading,
            load_started: false,
            haystacks: Vec::new(),
            match_prefix_chars: config.match_prefix_chars,
            group_label: config.group_label.clone(),
        }
    }

    /// Fetch the index. Only the first call does any work; failures end in
    /// [`LoadState::Failed`] and are never returned to the caller.
    pub async fn load<S: IndexSource>(&mut self, source: &S) -> &LoadState {
        if self.load_started {
            return &self.state;
        }
        self.load_started = true;

        let fetched = source.fetch().await.and_then(SearchIndex::new);

        self.state = match fetched {
            Ok(index) => {
                info!(
                    "Loaded search index with {} documents from {}",
                    index.len(),
                    source.describe()
                );
                self.haystacks = index
                    .records()
                    .iter()
                    .map(|record| {
                        let opening =
                            Validator::truncate_chars(&record.content, self.match_prefix_chars);
                        fold_case(&format!("{} {}", record.title, opening))
                    })
                    .collect();
                LoadState::Ready(index)
            }
            Err(e) => {
                error!("Failed to load search index from {}: {}", source.describe(), e);
                LoadState::Failed(e.to_string())
            }
        };

        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn query(&self, text: &str) -> SearchOutcome {
        self.query_limited(text, None)
    }

    /// Case-insensitive match of the whole query, or of every whitespace-separated
    /// term, against each record's title and opening content. Index order is kept.
    pub fn query_limited(&self, text: &str, limit: Option<usize>) -> SearchOutcome {
        let index = match &self.state {
            LoadState::Loading => return SearchOutcome::Loading,
            LoadState::Failed(reason) => return SearchOutcome::Failed(reason.clone()),
            LoadState::Ready(index) => index,
        };

        if index.is_empty() {
            return SearchOutcome::EmptyIndex;
        }

        let needle = fold_case(text.trim());
        let terms: Vec<&str> = needle.split_whitespace().collect();

        let matches: Vec<SearchMatch> = index
            .records()
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| {
                needle.is_empty()
                    || haystack.contains(&needle)
                    || terms.iter().all(|term| haystack.contains(term))
            })
            .map(|(record, _)| SearchMatch {
                path: record.path.clone(),
                title: record.title.clone(),
                snippet: Validator::truncate_chars(&record.content, self.match_prefix_chars)
                    .to_string(),
            })
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if matches.is_empty() {
            if !needle.is_empty() {
                warn!("No results for query {:?}", text);
            }
            return SearchOutcome::NoMatches;
        }

        SearchOutcome::Matches(MatchGroup {
            label: self.group_label.clone(),
            matches,
        })
    }
}

/// Per-character lowercase mapping. Unlike `str::to_lowercase` it ignores word
/// position, so a folded substring stays a substring of the folded whole.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexRecord;
    use crate::search::source::StaticIndexSource;
    use pretty_assertions::assert_eq;

    fn record(path: &str, title: &str, content: &str) -> IndexRecord {
        IndexRecord {
            id: path.to_string(),
            title: title.to_string(),
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn sample_records() -> Vec<IndexRecord> {
        vec![
            record("/guides/setup", "Getting Started", "Install the SDK and create an API key."),
            record("/api/events", "Events API", "List, create and update events."),
            record(
                "/api/orders",
                "Orders API",
                format!("{}refunds are described at the very end.", "x".repeat(200)).as_str(),
            ),
        ]
    }

    async fn loaded(records: Vec<IndexRecord>) -> SearchRuntime {
        let mut runtime = SearchRuntime::new(&SearchConfig::default());
        runtime.load(&StaticIndexSource::new(records)).await;
        runtime
    }

    #[tokio::test]
    async fn test_exact_title_matches() {
        let runtime = loaded(sample_records()).await;

        for title in ["Getting Started", "Events API", "Orders API"] {
            assert!(runtime.query(title).matches().iter().any(|m| m.title == title));
        }
    }

    #[tokio::test]
    async fn test_title_substring_case_insensitive() {
        let runtime = loaded(sample_records()).await;

        let outcome = runtime.query("events a");
        assert!(outcome.contains_path("/api/events"));

        let outcome = runtime.query("STARTED");
        assert!(outcome.contains_path("/guides/setup"));
    }

    #[tokio::test]
    async fn test_title_substring_matches_across_final_sigma() {
        let runtime = loaded(vec![record("/greek/asa", "ΑΣΑ", "")]).await;

        assert!(runtime.query("ΑΣ").contains_path("/greek/asa"));
        assert!(runtime.query("ασα").contains_path("/greek/asa"));
    }

    #[tokio::test]
    async fn test_terms_in_any_order() {
        let runtime = loaded(sample_records()).await;

        let outcome = runtime.query("key sdk");
        let paths: Vec<&str> = outcome.matches().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["/guides/setup"]);
    }

    #[tokio::test]
    async fn test_only_opening_content_is_searched() {
        let runtime = loaded(sample_records()).await;
        assert_eq!(runtime.query("refunds"), SearchOutcome::NoMatches);
    }

    #[tokio::test]
    async fn test_blank_query_lists_everything_with_limit() {
        let runtime = loaded(sample_records()).await;

        assert_eq!(runtime.query("  ").matches().len(), 3);
        assert_eq!(runtime.query_limited("api", Some(1)).matches().len(), 1);

        match runtime.query("api") {
            SearchOutcome::Matches(group) => assert_eq!(group.label, "Documentation"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_distinct_states() {
        let runtime = SearchRuntime::new(&SearchConfig::default());
        assert_eq!(runtime.query("x"), SearchOutcome::Loading);

        let empty = loaded(vec![]).await;
        assert_eq!(empty.query("x"), SearchOutcome::EmptyIndex);

        let full = loaded(sample_records()).await;
        assert_eq!(full.query("nothing like this"), SearchOutcome::NoMatches);
    }

    #[tokio::test]
    async fn test_failed_load_is_terminal_state() {
        let mut runtime = SearchRuntime::new(&SearchConfig::default());
        let state = runtime.load(&StaticIndexSource::failing("503 Service Unavailable")).await;

        assert!(matches!(state, LoadState::Failed(_)));
        assert!(!runtime.is_loading());
        assert!(matches!(runtime.query("events"), SearchOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_load_happens_once() {
        let mut runtime = SearchRuntime::new(&SearchConfig::default());
        runtime.load(&StaticIndexSource::failing("offline")).await;
        runtime.load(&StaticIndexSource::new(sample_records())).await;

        assert!(matches!(runtime.state(), LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_duplicate_paths_fail_load() {
        let mut runtime = SearchRuntime::new(&SearchConfig::default());
        let records = vec![record("/a", "A", ""), record("/a", "A again", "")];
        runtime.load(&StaticIndexSource::new(records)).await;

        assert!(matches!(runtime.state(), LoadState::Failed(_)));
    }
}

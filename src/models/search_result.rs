// file: src/models/search_result.rs
// description: Search result model returned by the client-side search runtime
// reference: Used by the search palette to present matches

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Route to navigate to when the match is selected
    pub path: String,

    /// Document title
    pub title: String,

    /// Opening slice of the document body
    pub snippet: String,
}

impl SearchMatch {
    /// Format as a summary string for display
    pub fn format_summary(&self, max_snippet_chars: usize) -> String {
        let preview = match self.snippet.char_indices().nth(max_snippet_chars) {
            Some((byte_index, _)) => format!("{}...", &self.snippet[..byte_index]),
            None => self.snippet.clone(),
        };

        format!("{} ({})\n{}\n", self.title, self.path, preview)
    }
}

/// Matches presented together under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    pub label: String,
    pub matches: Vec<SearchMatch>,
}

/// Result of resolving a query against the runtime. Each non-match state has its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Loading,
    Failed(String),
    EmptyIndex,
    NoMatches,
    Matches(MatchGroup),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[SearchMatch] {
        match self {
            SearchOutcome::Matches(group) => &group.matches,
            _ => &[],
        }
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.matches().iter().any(|m| m.path == path)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Loading => write!(f, "Loading search index..."),
            SearchOutcome::Failed(reason) => write!(f, "Failed to load search index: {}", reason),
            SearchOutcome::EmptyIndex => write!(f, "No documents found"),
            SearchOutcome::NoMatches => write!(f, "No results match your query"),
            SearchOutcome::Matches(group) => {
                write!(f, "{} ({} results)", group.label, group.matches.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchMatch {
        SearchMatch {
            path: "/api/events".to_string(),
            title: "Events API".to_string(),
            snippet: "List, create and update events for your organization".to_string(),
        }
    }

    #[test]
    fn test_format_summary() {
        let summary = sample().format_summary(10);
        assert!(summary.contains("Events API"));
        assert!(summary.contains("/api/events"));
        assert!(summary.contains("List, crea..."));
    }

    #[test]
    fn test_outcome_messages_are_distinct() {
        let messages = [
            SearchOutcome::Loading.to_string(),
            SearchOutcome::Failed("timeout".to_string()).to_string(),
            SearchOutcome::EmptyIndex.to_string(),
            SearchOutcome::NoMatches.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_outcome_matches_accessor() {
        let outcome = SearchOutcome::Matches(MatchGroup {
            label: "Documentation".to_string(),
            matches: vec![sample()],
        });

        assert!(outcome.contains_path("/api/events"));
        assert!(SearchOutcome::NoMatches.matches().is_empty());
    }
}

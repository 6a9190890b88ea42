// file: src/navigation/view.rs
// description: document view state machine with stale-load cancellation
// reference: Empty -> Loading -> Loaded | Error, newer navigations win

use crate::config::NavigationConfig;
use crate::content::ContentStore;
use crate::models::Anchor;
use crate::parser::{HeadingExtractor, MarkdownNormalizer};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub path: String,
    pub title: String,
    pub body: String,
    pub anchors: Vec<Anchor>,
    /// False when the body is the not-found placeholder.
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Empty,
    Loading { path: String },
    Loaded(LoadedDocument),
    Error { path: String, message: String },
}

/// Handle for one in-flight load. Only the most recent ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    path: String,
}

impl LoadTicket {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The view changed; anchors were recomputed and the scroll tracker must be reset.
    Applied,
    /// A newer navigation superseded this load; the result was dropped.
    Discarded,
}

pub struct DocumentView {
    state: ViewState,
    generation: u64,
    extractor: HeadingExtractor,
    normalizer: MarkdownNormalizer,
    not_found_body: String,
}

impl DocumentView {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            state: ViewState::Empty,
            generation: 0,
            extractor: HeadingExtractor::new(),
            normalizer: MarkdownNormalizer::new(),
            not_found_body: config.not_found_body.clone(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn anchors(&self) -> &[Anchor] {
        match &self.state {
            ViewState::Loaded(document) => &document.anchors,
            _ => &[],
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        match &self.state {
            ViewState::Empty => None,
            ViewState::Loading { path } | ViewState::Error { path, .. } => Some(path),
            ViewState::Loaded(document) => Some(&document.path),
        }
    }

    /// Start navigating to `path`. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self, path: impl Into<String>) -> LoadTicket {
        let path = path.into();
        self.generation += 1;
        debug!("Loading {} (generation {})", path, self.generation);
        self.state = ViewState::Loading { path: path.clone() };

        LoadTicket {
            generation: self.generation,
            path,
        }
    }

    /// Apply a load result. `Ok(None)` means the route has no content and resolves
    /// to the not-found placeholder.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<String>, String>,
    ) -> Completion {
        if ticket.generation != self.generation {
            debug!("Discarding stale load of {}", ticket.path);
            return Completion::Discarded;
        }

        self.state = match result {
            Ok(Some(body)) => ViewState::Loaded(self.prepare(ticket.path, body, true)),
            Ok(None) => {
                warn!("No content for {}", ticket.path);
                let body = self.not_found_body.clone();
                ViewState::Loaded(self.prepare(ticket.path, body, false))
            }
            Err(message) => {
                warn!("Failed to load {}: {}", ticket.path, message);
                ViewState::Error {
                    path: ticket.path,
                    message,
                }
            }
        };

        Completion::Applied
    }

    /// Synchronous navigation against an in-memory store.
    pub fn load_from(&mut self, store: &ContentStore, path: &str) -> Completion {
        let ticket = self.begin_load(path);
        let body = store.get(path).map(str::to_string);
        self.complete(ticket, Ok(body))
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = ViewState::Empty;
    }

    fn prepare(&self, path: String, body: String, found: bool) -> LoadedDocument {
        LoadedDocument {
            title: self.normalizer.extract_title(&body),
            anchors: self.extractor.extract(&body),
            path,
            body,
            found,
        }
    }
}

// file: src/search/palette.rs
// description: search surface state, global shortcut handling and result selection

use crate::models::{SearchMatch, SearchOutcome};
use crate::search::runtime::SearchRuntime;
use tracing::debug;

/// A key press as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn with_meta(key: impl Into<String>) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }
}

/// Global shortcut. `primary` accepts either Ctrl or Meta so the same binding
/// works as Ctrl+K and Cmd+K.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: String,
    pub primary: bool,
}

impl KeyCombo {
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !event.key.eq_ignore_ascii_case(&self.key) || event.alt {
            return false;
        }

        if self.primary {
            event.ctrl || event.meta
        } else {
            !event.ctrl && !event.meta
        }
    }
}

impl Default for KeyCombo {
    fn default() -> Self {
        Self {
            key: "k".to_string(),
            primary: true,
        }
    }
}

/// Whether the host must suppress its default handling of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
    Intercepted,
    PassThrough,
}

/// Request to route the application to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPalette {
    open: bool,
    query: String,
    combo: KeyCombo,
}

impl SearchPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_combo(combo: KeyCombo) -> Self {
        Self {
            combo,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyHandling {
        if self.combo.matches(event) {
            self.toggle();
            return KeyHandling::Intercepted;
        }

        if self.open && event.key == "Escape" {
            self.close();
            return KeyHandling::Intercepted;
        }

        KeyHandling::PassThrough
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        debug!("Search palette opened");
        self.open = true;
    }

    pub fn close(&mut self) {
        debug!("Search palette closed");
        self.open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn results(&self, runtime: &SearchRuntime) -> SearchOutcome {
        runtime.query(&self.query)
    }

    /// Hands off exactly one route and closes the surface.
    pub fn select(&mut self, selected: &SearchMatch) -> NavigationRequest {
        self.select_path(&selected.path)
    }

    pub fn select_path(&mut self, path: &str) -> NavigationRequest {
        self.close();
        NavigationRequest {
            path: path.to_string(),
        }
    }
}

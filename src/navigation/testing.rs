// file: src/navigation/testing.rs
// description: in-memory host double for navigation tests

use crate::models::HeadingPosition;
use crate::navigation::scroll_spy::Viewport;
use crate::navigation::subscription::{EventHost, HostEvent, ListenerId, TimerId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Default)]
pub(crate) struct FakeHost {
    scroll_y: Cell<f64>,
    visible: Cell<bool>,
    headings: RefCell<Vec<HeadingPosition>>,
    last_selector: RefCell<Option<String>>,
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<u64, HostEvent>>,
    timers: RefCell<HashMap<u64, Duration>>,
    removed: Cell<usize>,
    cleared: Cell<usize>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        let host = Self::default();
        host.visible.set(true);
        host
    }

    pub(crate) fn with_headings(headings: &[(&str, f64)]) -> Self {
        let host = Self::new();
        host.set_headings(headings);
        host
    }

    pub(crate) fn set_headings(&self, headings: &[(&str, f64)]) {
        *self.headings.borrow_mut() = headings
            .iter()
            .map(|(id, top)| HeadingPosition::new(*id, *top))
            .collect();
    }

    pub(crate) fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub(crate) fn listens_to(&self, event: HostEvent) -> bool {
        self.listeners.borrow().values().any(|e| *e == event)
    }

    pub(crate) fn removed_listeners(&self) -> usize {
        self.removed.get()
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub(crate) fn pending_timer_ids(&self) -> Vec<TimerId> {
        self.timers.borrow().keys().map(|id| TimerId(*id)).collect()
    }

    pub(crate) fn timer_delay(&self, id: TimerId) -> Option<Duration> {
        self.timers.borrow().get(&id.0).copied()
    }

    pub(crate) fn cleared_timers(&self) -> usize {
        self.cleared.get()
    }

    pub(crate) fn last_selector(&self) -> Option<String> {
        self.last_selector.borrow().clone()
    }

    /// Marks a timer as run by the event loop.
    pub(crate) fn fire_timer(&self, id: TimerId) -> bool {
        self.timers.borrow_mut().remove(&id.0).is_some()
    }

    fn next(&self) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl EventHost for FakeHost {
    fn add_listener(&self, event: HostEvent) -> ListenerId {
        let id = self.next();
        self.listeners.borrow_mut().insert(id, event);
        ListenerId(id)
    }

    fn remove_listener(&self, id: ListenerId) {
        if self.listeners.borrow_mut().remove(&id.0).is_some() {
            self.removed.set(self.removed.get() + 1);
        }
    }

    fn set_timeout(&self, delay: Duration) -> TimerId {
        let id = self.next();
        self.timers.borrow_mut().insert(id, delay);
        TimerId(id)
    }

    fn clear_timeout(&self, id: TimerId) {
        if self.timers.borrow_mut().remove(&id.0).is_some() {
            self.cleared.set(self.cleared.get() + 1);
        }
    }
}

impl Viewport for FakeHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn query_headings(&self, selector: &str) -> Vec<HeadingPosition> {
        *self.last_selector.borrow_mut() = Some(selector.to_string());
        self.headings.borrow().clone()
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

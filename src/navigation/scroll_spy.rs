// file: src/navigation/scroll_spy.rs
// description: tracks which heading is currently in view for table-of-contents highlighting
// reference: scroll position against heading offsets, throttled with a trailing run

use crate::config::NavigationConfig;
use crate::models::{ActiveChange, HeadingPosition};
use crate::navigation::subscription::{EventHost, HostEvent, Subscription, TimerGuard, TimerId};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Rendered document as seen by the tracker.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Elements matching `selector`, in any order.
    fn query_headings(&self, selector: &str) -> Vec<HeadingPosition>;

    fn is_visible(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct SpyConfig {
    pub throttle: Duration,
    /// Below this scroll position the first heading is always active.
    pub top_threshold: f64,
    /// A heading this many pixels below the reading line still counts as reached.
    pub tolerance: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self::from(&NavigationConfig::default())
    }
}

impl From<&NavigationConfig> for SpyConfig {
    fn from(config: &NavigationConfig) -> Self {
        Self {
            throttle: config.throttle(),
            top_threshold: config.top_threshold_px,
            tolerance: config.boundary_tolerance_px,
        }
    }
}

/// Active heading id for a scroll position. `offset` is the height of the fixed
/// header covering the top of the viewport.
pub fn compute_active(
    headings: &[HeadingPosition],
    scroll_y: f64,
    offset: f64,
    config: &SpyConfig,
) -> Option<String> {
    let mut headings: Vec<&HeadingPosition> =
        headings.iter().filter(|h| !h.id.is_empty()).collect();
    headings.sort_by(|a, b| a.top.total_cmp(&b.top));

    let first = headings.first()?;

    if scroll_y < config.top_threshold {
        return Some(first.id.clone());
    }

    let position = scroll_y + offset;

    let current = headings
        .iter()
        .take_while(|h| h.top - config.tolerance <= position)
        .last()
        .unwrap_or(first);

    Some(current.id.clone())
}

pub struct ScrollSpy<'h, H: EventHost + Viewport> {
    host: &'h H,
    selector: String,
    offset: f64,
    config: SpyConfig,
    listeners: Vec<Subscription<'h, H>>,
    trailing: Option<TimerGuard<'h, H>>,
    last_run: Option<Instant>,
    active: Option<String>,
}

impl<'h, H: EventHost + Viewport> ScrollSpy<'h, H> {
    /// Registers scroll and visibility listeners and computes the active heading right away.
    pub fn mount(
        host: &'h H,
        selector: impl Into<String>,
        offset: f64,
        config: SpyConfig,
        now: Instant,
    ) -> Self {
        let mut spy = Self {
            host,
            selector: selector.into(),
            offset,
            config,
            listeners: Vec::new(),
            trailing: None,
            last_run: None,
            active: None,
        };
        spy.subscribe();
        spy.run(now);
        spy
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn has_pending_timer(&self) -> bool {
        self.trailing.is_some()
    }

    /// Route a host event to the matching handler.
    pub fn dispatch(&mut self, event: HostEvent, now: Instant) -> Option<ActiveChange> {
        match event {
            HostEvent::Scroll => self.on_scroll(now),
            HostEvent::VisibilityChange => self.on_visibility_change(now),
        }
    }

    /// Throttled: runs at most once per interval and leaves one trailing timer so the
    /// resting position is always evaluated.
    pub fn on_scroll(&mut self, now: Instant) -> Option<ActiveChange> {
        if !self.host.is_visible() {
            return None;
        }

        let elapsed = self
            .last_run
            .map(|last| now.saturating_duration_since(last));

        match elapsed {
            Some(elapsed) if elapsed < self.config.throttle => {
                if self.trailing.is_none() {
                    let delay = self.config.throttle - elapsed;
                    trace!("Scroll throttled, trailing run in {:?}", delay);
                    self.trailing = Some(TimerGuard::schedule(self.host, delay));
                }
                None
            }
            _ => self.run(now),
        }
    }

    pub fn on_timer(&mut self, id: TimerId, now: Instant) -> Option<ActiveChange> {
        match self.trailing.take() {
            Some(timer) if timer.is(id) => {
                timer.fired();
                self.run(now)
            }
            other => {
                self.trailing = other;
                None
            }
        }
    }

    /// Recomputes immediately when the page becomes visible again, catching up on
    /// scroll events the host dropped while in the background.
    pub fn on_visibility_change(&mut self, now: Instant) -> Option<ActiveChange> {
        if !self.host.is_visible() {
            return None;
        }
        self.run(now)
    }

    /// Swap the tracked selector or header offset. Every listener and timer of the
    /// previous configuration is released first.
    pub fn reconfigure(
        &mut self,
        selector: impl Into<String>,
        offset: f64,
        now: Instant,
    ) -> Option<ActiveChange> {
        self.release();
        self.selector = selector.into();
        self.offset = offset;
        self.subscribe();
        self.run(now)
    }

    /// The displayed document changed: forget the previous active heading, then
    /// evaluate the new heading set.
    pub fn reset(&mut self, now: Instant) -> Option<ActiveChange> {
        if let Some(previous) = self.active.take() {
            debug!("Active section {} cleared", previous);
        }
        self.trailing = None;
        self.run(now)
    }

    fn subscribe(&mut self) {
        self.listeners = vec![
            Subscription::listen(self.host, HostEvent::Scroll),
            Subscription::listen(self.host, HostEvent::VisibilityChange),
        ];
    }

    fn release(&mut self) {
        self.listeners.clear();
        self.trailing = None;
        self.last_run = None;
    }

    fn run(&mut self, now: Instant) -> Option<ActiveChange> {
        self.last_run = Some(now);
        let headings = self.host.query_headings(&self.selector);
        let next = compute_active(&headings, self.host.scroll_y(), self.offset, &self.config);
        self.update(next)
    }

    fn update(&mut self, next: Option<String>) -> Option<ActiveChange> {
        if next == self.active {
            return None;
        }

        debug!("Active section {:?} -> {:?}", self.active, next);
        let previous = std::mem::replace(&mut self.active, next);
        Some(ActiveChange {
            previous,
            current: self.active.clone(),
        })
    }
}

// file: src/navigation/subscription.rs
// description: scoped ownership of host event listeners and timers
// reference: every registration is released exactly once, on drop or explicitly

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Scroll,
    VisibilityChange,
}

/// Event loop of the embedding host (a browser window, a webview, a test double).
/// Methods take `&self`; hosts are single-threaded and use interior mutability.
pub trait EventHost {
    fn add_listener(&self, event: HostEvent) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
    fn set_timeout(&self, delay: Duration) -> TimerId;
    fn clear_timeout(&self, id: TimerId);
}

/// A registered listener, removed from the host when dropped.
pub struct Subscription<'h, H: EventHost + ?Sized> {
    host: &'h H,
    event: HostEvent,
    id: Option<ListenerId>,
}

impl<'h, H: EventHost + ?Sized> Subscription<'h, H> {
    pub fn listen(host: &'h H, event: HostEvent) -> Self {
        let id = host.add_listener(event);
        Self {
            host,
            event,
            id: Some(id),
        }
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn event(&self) -> HostEvent {
        self.event
    }

    pub fn release(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if let Some(id) = self.id.take() {
            self.host.remove_listener(id);
        }
    }
}

impl<H: EventHost + ?Sized> Drop for Subscription<'_, H> {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// A pending timeout, cleared when dropped unless it already fired.
pub struct TimerGuard<'h, H: EventHost + ?Sized> {
    host: &'h H,
    id: Option<TimerId>,
}

impl<'h, H: EventHost + ?Sized> TimerGuard<'h, H> {
    pub fn schedule(host: &'h H, delay: Duration) -> Self {
        let id = host.set_timeout(delay);
        Self { host, id: Some(id) }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    pub fn is(&self, id: TimerId) -> bool {
        self.id == Some(id)
    }

    /// The host ran the timer; nothing is left to clear.
    pub fn fired(mut self) {
        self.id = None;
    }

    pub fn cancel(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(id) = self.id.take() {
            self.host.clear_timeout(id);
        }
    }
}

impl<H: EventHost + ?Sized> Drop for TimerGuard<'_, H> {
    fn drop(&mut self) {
        self.clear();
    }
}

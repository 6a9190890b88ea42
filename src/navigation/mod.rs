// file: src/navigation/mod.rs
// description: in-document navigation: document view, table of contents and scroll tracking
// reference: internal module structure

pub mod scroll_spy;
pub mod subscription;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use scroll_spy::{ScrollSpy, SpyConfig, Viewport, compute_active};
pub use subscription::{EventHost, HostEvent, ListenerId, Subscription, TimerGuard, TimerId};
pub use view::{Completion, DocumentView, LoadTicket, LoadedDocument, ViewState};

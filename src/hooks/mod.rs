//! Event notification for external tooling
//!
//! Every successful item fires one event:
//! - semver.validate: a version passed validation
//! - semver.set: a version was written
//! - semver.bump: a bumped version was written
//!
//! Listeners are registered on an `EventNotifier` that the dispatcher owns.
//! A failing listener is logged and skipped; it never fails the operation.

pub mod executor;
pub mod lifecycle;

use std::sync::mpsc::Sender;
use std::sync::Mutex;

use tracing::warn;

use crate::error::{ManifestSemverError, Result};

pub use executor::HookScriptListener;
pub use lifecycle::{EventKind, VersionEvent};

/// Receives version events
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &VersionEvent) -> Result<()>;
}

/// Adapts a closure into a listener
pub struct FnListener<F>(pub F);

impl<F> EventListener for FnListener<F>
where
    F: Fn(&VersionEvent) -> Result<()> + Send + Sync,
{
    fn on_event(&self, event: &VersionEvent) -> Result<()> {
        (self.0)(event)
    }
}

/// Forwards every event into a channel
pub struct ChannelListener {
    sender: Mutex<Sender<VersionEvent>>,
}

impl ChannelListener {
    pub fn new(sender: Sender<VersionEvent>) -> Self {
        ChannelListener {
            sender: Mutex::new(sender),
        }
    }
}

impl EventListener for ChannelListener {
    fn on_event(&self, event: &VersionEvent) -> Result<()> {
        let sender = self
            .sender
            .lock()
            .map_err(|_| ManifestSemverError::hook("event channel lock poisoned"))?;
        sender
            .send(event.clone())
            .map_err(|_| ManifestSemverError::hook("event channel closed"))
    }
}

/// Fans events out to registered listeners
#[derive(Default)]
pub struct EventNotifier {
    listeners: Vec<Box<dyn EventListener>>,
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn with_listener(mut self, listener: impl EventListener + 'static) -> Self {
        self.subscribe(listener);
        self
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener. Failures are logged, never returned.
    pub fn notify(&self, event: &VersionEvent) {
        for listener in &self.listeners {
            if let Err(e) = listener.on_event(event) {
                warn!(event = event.name(), error = %e, "event listener failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};

    fn event() -> VersionEvent {
        VersionEvent::Validated {
            version: "1.2.3".to_string(),
            source: None,
        }
    }

    #[test]
    fn test_channel_listener_receives_events() {
        let (tx, rx) = mpsc::channel();
        let notifier = EventNotifier::new().with_listener(ChannelListener::new(tx));

        notifier.notify(&event());

        assert_eq!(rx.try_recv().unwrap(), event());
    }

    #[test]
    fn test_failing_listener_does_not_stop_others() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let notifier = EventNotifier::new()
            .with_listener(FnListener(|_: &VersionEvent| -> Result<()> {
                Err(ManifestSemverError::hook("boom"))
            }))
            .with_listener(FnListener(move |_: &VersionEvent| -> Result<()> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));

        notifier.notify(&event());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_closed_channel_is_swallowed() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let notifier = EventNotifier::new().with_listener(ChannelListener::new(tx));
        notifier.notify(&event());
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn test_empty_notifier() {
        let notifier = EventNotifier::new();
        assert!(notifier.is_empty());
        notifier.notify(&event());
    }
}

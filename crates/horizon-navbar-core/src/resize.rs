//! Window-level resize notifications.
//!
//! A [`ResizeSource`] is handed to widgets that need to react to the host
//! window changing size. Hosts feed it either directly through
//! [`ResizeSource::emit`] or by forwarding winit window events.

use winit::event::WindowEvent;

use crate::logging::targets;
use crate::signal::{ConnectionGuard, Signal};

/// A new window size, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    /// New logical width.
    pub width: f32,
    /// New logical height.
    pub height: f32,
}

impl ResizeEvent {
    /// Create a resize event.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A subscribable stream of resize notifications.
#[derive(Default)]
pub struct ResizeSource {
    resized: Signal<ResizeEvent>,
}

impl ResizeSource {
    /// Create a source with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to resize notifications.
    ///
    /// The subscription lasts until the returned guard is dropped or
    /// disconnected.
    #[must_use = "the subscription is released immediately if the guard is not kept"]
    pub fn subscribe<F>(&self, slot: F) -> ConnectionGuard
    where
        F: Fn(&ResizeEvent) + Send + Sync + 'static,
    {
        self.resized.connect_scoped(slot)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.resized.connection_count()
    }

    /// Notify every subscriber of a new size.
    pub fn emit(&self, event: ResizeEvent) {
        tracing::trace!(target: targets::RESIZE, width = event.width, height = event.height, "resize");
        self.resized.emit(event);
    }

    /// Forward a winit window event.
    ///
    /// Only `WindowEvent::Resized` produces a notification; the physical size
    /// is converted to logical pixels with `scale_factor`. Returns whether a
    /// notification was emitted.
    pub fn feed_window_event(&self, event: &WindowEvent, scale_factor: f64) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(scale_factor);
                self.emit(ResizeEvent::new(logical.width, logical.height));
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for ResizeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSource")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_subscribe_and_release() {
        let source = ResizeSource::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let guard = {
            let seen = seen.clone();
            source.subscribe(move |event| seen.lock().push(*event))
        };
        assert_eq!(source.subscriber_count(), 1);

        source.emit(ResizeEvent::new(640.0, 480.0));
        drop(guard);
        source.emit(ResizeEvent::new(320.0, 240.0));

        assert_eq!(*seen.lock(), vec![ResizeEvent::new(640.0, 480.0)]);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_window_event_is_scaled_to_logical() {
        let source = ResizeSource::new();
        let seen = Arc::new(Mutex::new(None));
        let _guard = {
            let seen = seen.clone();
            source.subscribe(move |event| *seen.lock() = Some(*event))
        };

        let emitted = source.feed_window_event(&WindowEvent::Resized(PhysicalSize::new(1600, 1200)), 2.0);
        assert!(emitted);
        assert_eq!(*seen.lock(), Some(ResizeEvent::new(800.0, 600.0)));
    }

    #[test]
    fn test_other_window_events_are_ignored() {
        let source = ResizeSource::new();
        assert!(!source.feed_window_event(&WindowEvent::Focused(true), 1.0));
    }
}

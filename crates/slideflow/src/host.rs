//! The seam between a diagram slide and the presentation host.
//!
//! The host owns the container and the resize event source. A slide that
//! wants resize notifications subscribes and receives a
//! [`ResizeSubscription`]: an owned, non-clonable handle that is the only
//! way to unsubscribe. Consuming the handle on unsubscribe makes the
//! remove-a-fresh-closure leak impossible to write; there is no second
//! value that merely looks like the registered one.

use std::time::Instant;

use log::debug;

use crate::container::Container;
use slideflow_core::geometry::Size;

/// Proof of an active resize subscription.
///
/// Deliberately neither `Clone` nor `Copy`: exactly one handle exists per
/// subscription, and [`SlideHost::unsubscribe_resize`] consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct ResizeSubscription {
    id: u64,
}

impl ResizeSubscription {
    pub(crate) fn new(id: u64) -> Self {
        Self { id }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

/// What a presentation host provides to diagram slides.
pub trait SlideHost {
    /// Returns the slide's container, if it is currently mounted.
    fn container_mut(&mut self) -> Option<&mut Container>;

    /// Registers interest in resize events.
    fn subscribe_resize(&mut self) -> ResizeSubscription;

    /// Ends a subscription, consuming its handle.
    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription);

    /// Drains resize events that occurred since the last call, returning
    /// the instant of the most recent one, if any.
    fn poll_resize(&mut self) -> Option<Instant>;
}

/// An in-process host holding one container and a resize event queue.
///
/// Suitable for tests and for driving the engine from a CLI; an embedding
/// with a real windowing system implements [`SlideHost`] over its own
/// event loop instead.
#[derive(Debug, Default)]
pub struct BasicHost {
    container: Option<Container>,
    next_subscription_id: u64,
    active_subscriptions: Vec<u64>,
    pending_resize: Option<Instant>,
}

impl BasicHost {
    /// Creates a host with a mounted container of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            container: Some(Container::new(size)),
            ..Self::default()
        }
    }

    /// Creates a host whose container is not mounted. Layout passes against
    /// it are skipped until a container appears.
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Mounts a container, replacing any existing one.
    pub fn mount(&mut self, container: Container) {
        self.container = Some(container);
    }

    /// Returns the container for inspection, if mounted.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Simulates a container resize at `now`, queueing a resize event for
    /// subscribers.
    pub fn resize(&mut self, size: Size, now: Instant) {
        if let Some(container) = &mut self.container {
            container.set_size(size);
        }
        if !self.active_subscriptions.is_empty() {
            self.pending_resize = Some(now);
        }
    }

    /// Number of currently active resize subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.active_subscriptions.len()
    }
}

impl SlideHost for BasicHost {
    fn container_mut(&mut self) -> Option<&mut Container> {
        self.container.as_mut()
    }

    fn subscribe_resize(&mut self) -> ResizeSubscription {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.active_subscriptions.push(id);
        debug!(subscription = id; "resize subscription added");
        ResizeSubscription::new(id)
    }

    fn unsubscribe_resize(&mut self, subscription: ResizeSubscription) {
        self.active_subscriptions
            .retain(|id| *id != subscription.id());
        debug!(subscription = subscription.id(); "resize subscription removed");
    }

    fn poll_resize(&mut self) -> Option<Instant> {
        self.pending_resize.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsubscribe_consumes_the_handle() {
        let mut host = BasicHost::new(Size::new(800.0, 300.0));

        let first = host.subscribe_resize();
        let second = host.subscribe_resize();
        assert_eq!(host.subscription_count(), 2);

        host.unsubscribe_resize(first);
        assert_eq!(host.subscription_count(), 1);

        host.unsubscribe_resize(second);
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn test_resize_without_subscribers_queues_nothing() {
        let mut host = BasicHost::new(Size::new(800.0, 300.0));

        host.resize(Size::new(400.0, 200.0), Instant::now());

        assert!(host.poll_resize().is_none());
        // The container still resized
        assert_eq!(
            host.container().unwrap().size(),
            Size::new(400.0, 200.0)
        );
    }

    #[test]
    fn test_poll_drains_the_pending_event() {
        let mut host = BasicHost::new(Size::new(800.0, 300.0));
        let _subscription = host.subscribe_resize();
        let now = Instant::now();

        host.resize(Size::new(400.0, 200.0), now);

        assert_eq!(host.poll_resize(), Some(now));
        assert!(host.poll_resize().is_none());
    }

    #[test]
    fn test_unmounted_host_has_no_container() {
        let mut host = BasicHost::unmounted();
        assert!(host.container_mut().is_none());

        host.mount(Container::new(Size::new(100.0, 100.0)));
        assert!(host.container_mut().is_some());
    }
}

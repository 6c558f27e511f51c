//! Slide lifecycle: initialize, react to resizes, clean up.
//!
//! A [`DiagramSlide`] is what a presentation host drives. `initialize`
//! subscribes to resize events, keeps the owned subscription handle, and
//! runs the first layout pass. Resize events feed a trailing-edge
//! [`Debouncer`]; `tick` polls the host and relayouts once per settled
//! burst. `cleanup` is the exact inverse of `initialize` and is
//! idempotent, so a host may call it defensively.

use std::time::Instant;

use log::{info, warn};

use crate::{
    config::AppConfig,
    debounce::Debouncer,
    host::{ResizeSubscription, SlideHost},
    layout::{LayoutController, LayoutReport},
    spec::DiagramSpec,
};

/// One diagram-bearing slide, from initialize to cleanup.
#[derive(Debug)]
pub struct DiagramSlide {
    controller: LayoutController,
    debouncer: Debouncer,
    subscription: Option<ResizeSubscription>,
}

impl DiagramSlide {
    /// Creates a slide with the default configuration.
    pub fn new(spec: DiagramSpec) -> Self {
        Self {
            controller: LayoutController::new(spec),
            debouncer: Debouncer::new(AppConfig::default().timing().debounce_delay()),
            subscription: None,
        }
    }

    /// Creates a slide with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed.
    pub fn with_config(spec: DiagramSpec, config: &AppConfig) -> Result<Self, String> {
        Ok(Self {
            controller: LayoutController::with_style(spec, config.style())?,
            debouncer: Debouncer::new(config.timing().debounce_delay()),
            subscription: None,
        })
    }

    /// Returns the layout controller, for direct rendering.
    pub fn controller(&self) -> &LayoutController {
        &self.controller
    }

    /// Returns `true` between a successful `initialize` and `cleanup`.
    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes to resize events and runs the first layout pass.
    ///
    /// Initializing an already-initialized slide is ignored apart from a
    /// warning; the existing subscription and container contents stay.
    pub fn initialize(&mut self, host: &mut dyn SlideHost) -> LayoutReport {
        if self.subscription.is_some() {
            warn!("slide is already initialized, ignoring");
            return LayoutReport::default();
        }

        self.subscription = Some(host.subscribe_resize());
        info!("diagram slide initialized");
        self.controller.layout(host.container_mut())
    }

    /// Records a resize event at `now`. The relayout itself happens in a
    /// later [`DiagramSlide::tick`] once the debounce window passes.
    pub fn on_resize(&mut self, now: Instant) {
        if self.subscription.is_some() {
            self.debouncer.trigger(now);
        }
    }

    /// Polls the host for resize events and runs at most one debounced
    /// relayout. Returns the pass report when a relayout ran.
    pub fn tick(&mut self, host: &mut dyn SlideHost, now: Instant) -> Option<LayoutReport> {
        if let Some(at) = host.poll_resize() {
            self.on_resize(at);
        }

        if self.subscription.is_some() && self.debouncer.fire_ready(now) {
            return Some(self.controller.layout(host.container_mut()));
        }

        None
    }

    /// Unsubscribes, cancels any pending relayout, and empties the
    /// container. Safe to call on an uninitialized slide.
    pub fn cleanup(&mut self, host: &mut dyn SlideHost) {
        self.debouncer.cancel();

        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe_resize(subscription);
            if let Some(container) = host.container_mut() {
                container.clear();
            }
            info!("diagram slide cleaned up");
        }
    }
}

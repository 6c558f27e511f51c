//! Slideflow - a flowchart layout and connector-routing engine for slide
//! modules.
//!
//! A diagram is a static declaration of labeled nodes (with positions and
//! sizes) and directed connections between them. The engine places node
//! visuals, computes boundary anchor points for each connection, chooses a
//! routing shape (straight, cubic curve, orthogonal, or self-loop), and
//! renders directional arrowheads and optional inline labels into a
//! bounded container. On container resize the whole pipeline re-runs from
//! the static spec, debounced, with no state carried over between passes.
//!
//! # Pipeline
//!
//! [`layout::LayoutController`] drives one render pass:
//! resolve node positions against the current container bounds →
//! [`anchor::resolve_anchors`] per connection →
//! [`route::synthesize_route`] → [`render::Renderer`].
//!
//! # Lifecycle
//!
//! [`lifecycle::DiagramSlide`] is the `initialize`/`cleanup` contract a
//! diagram-bearing slide exposes to the presentation host. It owns the
//! resize subscription handle and the debounce timer; `cleanup` releases
//! both and empties the container.
//!
//! # Examples
//!
//! ```
//! use slideflow::container::Container;
//! use slideflow::layout::LayoutController;
//! use slideflow_core::geometry::Size;
//!
//! let spec = slideflow::demo::horizontal_process();
//! let controller = LayoutController::new(spec);
//!
//! let mut container = Container::new(Size::new(800.0, 300.0));
//! let report = controller.layout(Some(&mut container));
//!
//! assert_eq!(report.nodes_rendered(), 5);
//! assert_eq!(report.connections_rendered(), 5);
//! ```

pub mod anchor;
pub mod config;
pub mod container;
pub mod demo;
pub mod host;
pub mod layout;
pub mod lifecycle;
pub mod render;
pub mod route;
pub mod spec;

mod debounce;
mod error;

pub use debounce::Debouncer;
pub use error::DiagramError;

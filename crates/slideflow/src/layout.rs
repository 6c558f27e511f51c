//! The layout controller: one full rebuild per pass.
//!
//! A pass owns no state between invocations. It resolves every node
//! position from the static spec against the container bounds of the
//! moment, routes every connection from those fresh positions, and
//! replaces the container's primitives wholesale. Incremental updates are
//! deliberately absent; rebuilding everything keeps resize behavior
//! trivially correct.
//!
//! Errors during a pass are recovered, never propagated: a bad node or a
//! dangling connection is logged, reported, and skipped while the rest of
//! the diagram still renders.

use log::{info, warn};

use crate::{
    anchor::resolve_anchors,
    config::StyleConfig,
    container::Container,
    error::DiagramError,
    render::Renderer,
    route::{synthesize_route, RoutedConnection},
    spec::{DiagramSpec, PlacedNode},
};

/// What one layout pass accomplished.
#[derive(Debug, Clone, Default)]
pub struct LayoutReport {
    nodes_rendered: usize,
    connections_rendered: usize,
    recovered: Vec<DiagramError>,
}

impl LayoutReport {
    /// Number of node visuals placed this pass.
    pub fn nodes_rendered(&self) -> usize {
        self.nodes_rendered
    }

    /// Number of connection paths routed this pass.
    pub fn connections_rendered(&self) -> usize {
        self.connections_rendered
    }

    /// Errors that were recovered during the pass, in encounter order.
    pub fn recovered(&self) -> &[DiagramError] {
        &self.recovered
    }
}

/// Drives layout passes for one diagram declaration.
#[derive(Debug, Clone)]
pub struct LayoutController {
    spec: DiagramSpec,
    renderer: Renderer,
}

impl LayoutController {
    /// Creates a controller with the default style.
    pub fn new(spec: DiagramSpec) -> Self {
        Self {
            spec,
            renderer: Renderer::default(),
        }
    }

    /// Creates a controller with the given style configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed.
    pub fn with_style(spec: DiagramSpec, style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            spec,
            renderer: Renderer::from_style(style)?,
        })
    }

    /// Returns the diagram declaration this controller lays out.
    pub fn spec(&self) -> &DiagramSpec {
        &self.spec
    }

    /// Runs one full layout pass into the given container.
    ///
    /// A missing container or a degenerate container size skips the pass
    /// entirely; a later resize retries from scratch. Individual bad nodes
    /// or connections are skipped and reported while the rest renders.
    pub fn layout(&self, container: Option<&mut Container>) -> LayoutReport {
        let mut report = LayoutReport::default();

        let Some(container) = container else {
            warn!("layout pass skipped, container is not available");
            report.recovered.push(DiagramError::MissingContainer);
            return report;
        };

        if container.size().is_degenerate() {
            warn!(
                width = container.size().width() as f64,
                height = container.size().height() as f64;
                "layout pass skipped, container has no usable area"
            );
            report
                .recovered
                .push(DiagramError::RenderTargetUnavailable(format!(
                    "container size {}x{}",
                    container.size().width(),
                    container.size().height()
                )));
            return report;
        }

        let bounds = container.bounds();
        let mut placed: Vec<PlacedNode<'_>> = Vec::with_capacity(self.spec.nodes().len());

        for node in self.spec.nodes() {
            if node.size().is_degenerate() {
                warn!(node = node.id(); "skipping node with non-positive size");
                report.recovered.push(DiagramError::InvalidNode {
                    id: node.id().to_string(),
                    reason: format!(
                        "non-positive size {}x{}",
                        node.size().width(),
                        node.size().height()
                    ),
                });
                continue;
            }

            let center = node.resolve_center(container.size());
            if !bounds.contains(center) {
                // Rendered anyway at its declared position; clipping is the
                // host's concern.
                warn!(
                    node = node.id(),
                    x = center.x() as f64,
                    y = center.y() as f64;
                    "node center lies outside container bounds"
                );
            }

            placed.push(PlacedNode::new(node, center));
        }

        let mut routed: Vec<RoutedConnection<'_>> =
            Vec::with_capacity(self.spec.connections().len());

        for connection in self.spec.connections() {
            let from = find_placed(&placed, connection.from());
            let to = find_placed(&placed, connection.to());

            let (from, to) = match (from, to) {
                (Some(from), Some(to)) => (from, to),
                (missing_from, _) => {
                    let missing = if missing_from.is_none() {
                        connection.from()
                    } else {
                        connection.to()
                    };
                    warn!(
                        from = connection.from(),
                        to = connection.to(),
                        missing = missing;
                        "skipping connection to unknown node"
                    );
                    report.recovered.push(DiagramError::DanglingConnection {
                        from: connection.from().to_string(),
                        to: connection.to().to_string(),
                        missing: missing.to_string(),
                    });
                    continue;
                }
            };

            let anchors = resolve_anchors(from, to);
            let route = synthesize_route(&anchors, from, to);
            routed.push(RoutedConnection::new(connection, route));
        }

        self.renderer.render(container, &placed, &routed);

        report.nodes_rendered = placed.len();
        report.connections_rendered = routed.len();

        info!(
            nodes = report.nodes_rendered,
            connections = report.connections_rendered,
            recovered = report.recovered.len();
            "diagram layout pass complete"
        );

        report
    }

    /// Materializes the container's current primitives into an SVG document.
    pub fn to_document(&self, container: &Container) -> svg::Document {
        self.renderer.to_document(container)
    }
}

/// Finds the first placed node with the given id. Duplicate ids resolve to
/// the first declaration.
fn find_placed<'p, 'a>(placed: &'p [PlacedNode<'a>], id: &str) -> Option<&'p PlacedNode<'a>> {
    placed.iter().find(|node| node.id() == id)
}

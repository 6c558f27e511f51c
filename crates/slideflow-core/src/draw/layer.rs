//! Layer-based rendering for SVG output.
//!
//! Diagram output has a fixed z-order contract: connector lines render
//! below everything, labels render above the lines so they stay legible,
//! and node shapes render topmost. [`LayeredOutput`] collects SVG nodes
//! per [`RenderLayer`] and emits them bottom-to-top as grouped elements,
//! regardless of the order in which components produced them.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in declaration order; the `Ord`
/// derive uses that order, so the first variant renders first (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Connector lines, curves, and arrowheads - renders first (bottom)
    Connector,
    /// Connection labels - above the lines so they remain legible
    Label,
    /// Node shapes and node text - topmost
    Node,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connector => "connector",
            Self::Label => "label",
            Self::Node => "node",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// Nodes are collected in any order and emitted in layer order (bottom to
/// top), ensuring the z-order contract holds for every render pass.
///
/// # Example
///
/// ```
/// # use slideflow_core::draw::{RenderLayer, LayeredOutput};
/// # use svg::node::element::{Path, Rectangle};
///
/// let mut output = LayeredOutput::new();
/// output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
/// output.add_to_layer(RenderLayer::Connector, Box::new(Path::new()));
///
/// // Connector group renders before the node group
/// let svg_nodes = output.render();
/// assert_eq!(svg_nodes.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a
    /// `data-layer` attribute identifying the layer. Empty layers are
    /// skipped. This method consumes the `LayeredOutput` to avoid cloning
    /// SVG nodes.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

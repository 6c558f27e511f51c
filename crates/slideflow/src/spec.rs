//! Static diagram declarations.
//!
//! A [`DiagramSpec`] is the declarative list of nodes and connections
//! defining one flowchart instance. It is authored as part of the slide
//! module, owned by the layout controller for the lifetime of the slide,
//! and never mutated by a render pass - every pass derives fresh
//! [`PlacedNode`]s from it against the container bounds of the moment.

use slideflow_core::{
    color::Color,
    geometry::{Point, Size},
    shape::NodeShape,
};

/// A container-relative coordinate, resolved at layout time.
///
/// Fractional and end-relative coordinates re-resolve against the current
/// container extent on every pass, so a diagram declared once follows the
/// container through resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    /// An absolute pixel offset from the container's near edge.
    Px(f32),
    /// A fraction of the container extent (0.0 = near edge, 1.0 = far edge).
    Frac(f32),
    /// An absolute pixel offset back from the container's far edge.
    FromEnd(f32),
}

impl Coord {
    /// Resolves this coordinate against a container extent.
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Self::Px(value) => value,
            Self::Frac(fraction) => extent * fraction,
            Self::FromEnd(offset) => extent - offset,
        }
    }
}

/// Visual attributes of a node: fill, border, and text colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    fill: Color,
    border: Color,
    text_color: Color,
}

impl NodeStyle {
    pub fn new(fill: Color, border: Color, text_color: Color) -> Self {
        Self {
            fill,
            border,
            text_color,
        }
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the border color.
    pub fn border(&self) -> Color {
        self.border
    }

    /// Returns the text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill: Color::new("white").expect("'white' is a valid CSS color"),
            border: Color::default(),
            text_color: Color::default(),
        }
    }
}

/// One node declaration: a labeled shape centered at a declared position.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    id: String,
    text: String,
    shape: NodeShape,
    x: Coord,
    y: Coord,
    width: f32,
    height: f32,
    style: NodeStyle,
}

impl NodeSpec {
    /// Creates a rectangular node with the default style.
    ///
    /// `x`/`y` are the node's *center* coordinates, container-relative.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        x: Coord,
        y: Coord,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            shape: NodeShape::rectangle(),
            x,
            y,
            width,
            height,
            style: NodeStyle::default(),
        }
    }

    /// Replaces the node's shape.
    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Replaces the node's visual style.
    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the node's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the node's label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the node's shape.
    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    /// Returns the node's visual style.
    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Returns the node's declared size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resolves the node's center against the given container size.
    pub fn resolve_center(&self, container: Size) -> Point {
        Point::new(
            self.x.resolve(container.width()),
            self.y.resolve(container.height()),
        )
    }
}

/// One directed connection between two nodes, with an optional inline label.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSpec {
    from: String,
    to: String,
    label: Option<String>,
}

impl ConnectionSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    /// Attaches an inline label rendered at the path midpoint.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the source node id.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Returns the target node id.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// The static, declarative description of one flowchart.
///
/// Nodes and connections keep their declaration order; connections are
/// resolved and rendered in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramSpec {
    nodes: Vec<NodeSpec>,
    connections: Vec<ConnectionSpec>,
}

impl DiagramSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node declaration.
    pub fn with_node(mut self, node: NodeSpec) -> Self {
        self.nodes.push(node);
        self
    }

    /// Appends a connection declaration.
    pub fn with_connection(mut self, connection: ConnectionSpec) -> Self {
        self.connections.push(connection);
        self
    }

    /// Returns the declared nodes in order.
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    /// Returns the declared connections in order.
    pub fn connections(&self) -> &[ConnectionSpec] {
        &self.connections
    }
}

/// A node with its position resolved against the current container bounds.
///
/// Derived per render pass and discarded afterwards; holding it across a
/// resize would pin stale geometry.
#[derive(Debug, Clone, Copy)]
pub struct PlacedNode<'a> {
    node: &'a NodeSpec,
    center: Point,
}

impl<'a> PlacedNode<'a> {
    pub fn new(node: &'a NodeSpec, center: Point) -> Self {
        Self { node, center }
    }

    /// Returns the underlying node declaration.
    pub fn node(&self) -> &'a NodeSpec {
        self.node
    }

    /// Returns the node id.
    pub fn id(&self) -> &'a str {
        self.node.id()
    }

    /// Returns the resolved absolute center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the declared size.
    pub fn size(&self) -> Size {
        self.node.size()
    }

    /// Returns the node shape.
    pub fn shape(&self) -> NodeShape {
        self.node.shape()
    }
}

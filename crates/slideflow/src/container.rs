//! The bounded surface a diagram renders into.
//!
//! A [`Container`] holds the current bounds and the flat list of
//! [`Primitive`]s produced by the last layout pass. Primitives are the
//! engine's drawing commands in resolved absolute coordinates; the SVG
//! renderer materializes them into a document, and tests inspect them
//! directly without parsing markup.
//!
//! Every pass starts from [`Container::clear`]: the previous pass's output
//! is discarded wholesale, never patched.

use slideflow_core::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Bounds, Point, Size},
    shape::NodeShape,
};

use crate::route::RouteKind;

/// One resolved drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A node visual with its text centered inside.
    Node {
        id: String,
        text: String,
        shape: NodeShape,
        center: Point,
        size: Size,
        fill: Color,
        border: Color,
        text_color: Color,
    },
    /// A connection path with an arrowhead at its final point.
    Connector {
        kind: RouteKind,
        points: Vec<Point>,
        stroke: StrokeDefinition,
    },
    /// Free-standing label text centered on a point.
    Label {
        text: String,
        position: Point,
        color: Color,
    },
}

/// A diagram's drawing surface: bounds plus the primitives of the last pass.
#[derive(Debug, Clone, Default)]
pub struct Container {
    size: Size,
    primitives: Vec<Primitive>,
}

impl Container {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    /// Returns the current container size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the container's bounds, anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.size)
    }

    /// Updates the container size. Existing primitives keep their old
    /// coordinates until the next layout pass replaces them.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Appends one primitive.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Discards all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Returns the primitives in the order they were pushed.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Counts the node primitives currently held.
    pub fn node_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Node { .. }))
            .count()
    }

    /// Counts the connector primitives currently held.
    pub fn connector_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Connector { .. }))
            .count()
    }

    /// Counts the free-standing label primitives currently held.
    pub fn label_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Label { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> Primitive {
        Primitive::Label {
            text: text.to_string(),
            position: Point::new(0.0, 0.0),
            color: Color::default(),
        }
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut container = Container::new(Size::new(800.0, 300.0));
        container.push(label("a"));
        container.push(label("b"));
        assert_eq!(container.primitives().len(), 2);

        container.clear();
        assert!(container.is_empty());
        // Bounds survive a clear
        assert_eq!(container.size(), Size::new(800.0, 300.0));
    }

    #[test]
    fn test_counts_by_primitive_kind() {
        let mut container = Container::new(Size::new(100.0, 100.0));
        container.push(label("x"));
        container.push(Primitive::Connector {
            kind: RouteKind::Straight,
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            stroke: StrokeDefinition::default(),
        });

        assert_eq!(container.node_count(), 0);
        assert_eq!(container.connector_count(), 1);
        assert_eq!(container.label_count(), 1);
    }

    #[test]
    fn test_set_size_keeps_primitives() {
        let mut container = Container::new(Size::new(100.0, 100.0));
        container.push(label("x"));

        container.set_size(Size::new(200.0, 150.0));
        assert_eq!(container.size(), Size::new(200.0, 150.0));
        assert_eq!(container.primitives().len(), 1);
    }
}

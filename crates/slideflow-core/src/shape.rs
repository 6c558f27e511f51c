//! Node shape variants and per-shape boundary math.
//!
//! [`NodeShape`] is a closed set: each variant knows how far its boundary
//! sits from the center along a given axis (used to compute connection
//! anchor points) and how to render itself to SVG. Adding a shape means
//! adding a variant and extending the two matches here - anchor math never
//! leaks into the resolver.

use svg::{self, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// The axis along which an anchor point leaves a node's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The visual shape of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeShape {
    /// A process box. `rounded` is the corner radius in pixels.
    Rectangle { rounded: f32 },
    /// A decision diamond with vertices on the horizontal and vertical axes.
    Decision,
}

impl NodeShape {
    /// A rectangle with the default corner rounding used by flowchart nodes.
    pub fn rectangle() -> Self {
        Self::Rectangle { rounded: 4.0 }
    }

    /// Returns the distance from the shape's center to its boundary along
    /// the given axis.
    ///
    /// For a rectangle this is the half extent. A decision diamond's
    /// vertices lie exactly on the axes, so its on-axis radius is also the
    /// half extent - the dispatch exists so future shapes (ovals, hexagons)
    /// can differ without touching the anchor resolver.
    pub fn axis_radius(self, axis: Axis, size: Size) -> f32 {
        match self {
            Self::Rectangle { .. } => match axis {
                Axis::Horizontal => size.width() / 2.0,
                Axis::Vertical => size.height() / 2.0,
            },
            Self::Decision => match axis {
                Axis::Horizontal => size.width() / 2.0,
                Axis::Vertical => size.height() / 2.0,
            },
        }
    }

    /// Renders the shape outline to SVG, centered at `position`.
    pub fn render_to_svg(
        self,
        position: Point,
        size: Size,
        fill: &Color,
        stroke: &StrokeDefinition,
    ) -> Box<dyn svg::Node> {
        match self {
            Self::Rectangle { rounded } => {
                let bounds = position.to_bounds(size);

                let rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", rounded)
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());

                Box::new(apply_stroke!(rect, stroke))
            }
            Self::Decision => {
                let half_width = size.width() / 2.0;
                let half_height = size.height() / 2.0;

                // Diamond vertices: top, right, bottom, left
                let points = format!(
                    "{},{} {},{} {},{} {},{}",
                    position.x(),
                    position.y() - half_height,
                    position.x() + half_width,
                    position.y(),
                    position.x(),
                    position.y() + half_height,
                    position.x() - half_width,
                    position.y(),
                );

                let polygon = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());

                Box::new(apply_stroke!(polygon, stroke))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_axis_radius() {
        let shape = NodeShape::rectangle();
        let size = Size::new(100.0, 40.0);

        assert_eq!(shape.axis_radius(Axis::Horizontal, size), 50.0);
        assert_eq!(shape.axis_radius(Axis::Vertical, size), 20.0);
    }

    #[test]
    fn test_decision_axis_radius_is_vertex_distance() {
        let shape = NodeShape::Decision;
        let size = Size::new(120.0, 80.0);

        // The diamond's vertices sit on the axes at the half extents
        assert_eq!(shape.axis_radius(Axis::Horizontal, size), 60.0);
        assert_eq!(shape.axis_radius(Axis::Vertical, size), 40.0);
    }

    #[test]
    fn test_rectangle_renders_rect_element() {
        let shape = NodeShape::rectangle();
        let rendered = shape
            .render_to_svg(
                Point::new(60.0, 100.0),
                Size::new(100.0, 40.0),
                &Color::new("white").unwrap(),
                &StrokeDefinition::default(),
            )
            .to_string();

        assert!(rendered.contains("<rect"));
        assert!(rendered.contains("x=\"10\""));
        assert!(rendered.contains("y=\"80\""));
    }

    #[test]
    fn test_decision_renders_polygon_with_axis_vertices() {
        let shape = NodeShape::Decision;
        let rendered = shape
            .render_to_svg(
                Point::new(150.0, 200.0),
                Size::new(120.0, 80.0),
                &Color::new("white").unwrap(),
                &StrokeDefinition::default(),
            )
            .to_string();

        assert!(rendered.contains("<polygon"));
        // Right vertex at (210, 200), top vertex at (150, 160)
        assert!(rendered.contains("210,200"));
        assert!(rendered.contains("150,160"));
    }
}

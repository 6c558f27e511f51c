//! SVG materialization of container primitives.
//!
//! The [`Renderer`] has two halves. `render` turns one pass's resolved
//! geometry into [`Primitive`]s inside the container, where tests can
//! inspect coordinates directly. `to_document` materializes those
//! primitives into an `svg::Document`, honoring the z-order contract via
//! [`LayeredOutput`]: connector lines at the bottom, connection labels
//! above them, node visuals topmost.

use svg::{node::element as svg_element, Document};

use slideflow_core::{
    apply_stroke,
    color::Color,
    draw::{
        marker::{create_marker_definitions, marker_end_reference},
        LayeredOutput, RenderLayer, StrokeDefinition,
    },
    geometry::{Point, Size},
};

use crate::{
    config::StyleConfig,
    container::{Container, Primitive},
    route::{RouteKind, RoutedConnection},
    spec::PlacedNode,
};

/// Padding around label text inside its background chip.
const LABEL_PADDING: f32 = 4.0;

/// Renders resolved diagram geometry into a container and on to SVG.
#[derive(Debug, Clone)]
pub struct Renderer {
    connector_stroke: StrokeDefinition,
    label_font_size: f32,
    node_font_size: f32,
    background: Option<Color>,
}

impl Renderer {
    /// Builds a renderer from a style configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed.
    pub fn from_style(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            connector_stroke: style.connector_stroke()?,
            label_font_size: style.label_font_size(),
            node_font_size: style.node_font_size(),
            background: style.background_color()?,
        })
    }

    /// Replaces the previous pass's primitives with the given geometry.
    ///
    /// Connectors and their labels are emitted in connection declaration
    /// order, then the nodes in node declaration order.
    pub fn render(
        &self,
        container: &mut Container,
        nodes: &[PlacedNode<'_>],
        connections: &[RoutedConnection<'_>],
    ) {
        container.clear();

        for routed in connections {
            let route = routed.route();
            container.push(Primitive::Connector {
                kind: route.kind(),
                points: route.points().to_vec(),
                stroke: self.connector_stroke.clone(),
            });

            if let Some(label) = routed.connection().label() {
                container.push(Primitive::Label {
                    text: label.to_string(),
                    position: route.label_anchor(),
                    color: self.connector_stroke.color(),
                });
            }
        }

        for placed in nodes {
            let style = placed.node().style();
            container.push(Primitive::Node {
                id: placed.id().to_string(),
                text: placed.node().text().to_string(),
                shape: placed.shape(),
                center: placed.center(),
                size: placed.size(),
                fill: style.fill(),
                border: style.border(),
                text_color: style.text_color(),
            });
        }
    }

    /// Materializes the container's primitives into an SVG document.
    pub fn to_document(&self, container: &Container) -> Document {
        let size = container.size();
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        // One arrowhead marker per connector color in use
        let connector_colors: Vec<Color> = container
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Connector { stroke, .. } => Some(stroke.color()),
                _ => None,
            })
            .collect();
        doc = doc.add(create_marker_definitions(connector_colors.iter()));

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", background.to_string()),
            );
        }

        let mut output = LayeredOutput::new();
        for primitive in container.primitives() {
            match primitive {
                Primitive::Connector {
                    kind,
                    points,
                    stroke,
                } => {
                    output.add_to_layer(
                        RenderLayer::Connector,
                        Box::new(self.connector_path(*kind, points, stroke)),
                    );
                }
                Primitive::Label {
                    text,
                    position,
                    color,
                } => {
                    // White chip behind the text keeps it legible where the
                    // label crosses other strokes
                    let size = estimate_text_size(text, self.label_font_size);
                    let chip = svg_element::Rectangle::new()
                        .set("x", position.x() - size.width() / 2.0 - LABEL_PADDING)
                        .set("y", position.y() - size.height() / 2.0 - LABEL_PADDING)
                        .set("width", size.width() + 2.0 * LABEL_PADDING)
                        .set("height", size.height() + 2.0 * LABEL_PADDING)
                        .set("fill", "white")
                        .set("fill-opacity", 0.8)
                        .set("rx", 3.0);
                    output.add_to_layer(RenderLayer::Label, Box::new(chip));
                    output.add_to_layer(
                        RenderLayer::Label,
                        Box::new(self.text_element(text, *position, color, self.label_font_size)),
                    );
                }
                Primitive::Node {
                    text,
                    shape,
                    center,
                    size,
                    fill,
                    border,
                    text_color,
                    ..
                } => {
                    let border_stroke = StrokeDefinition::new(*border, 1.0);
                    output.add_to_layer(
                        RenderLayer::Node,
                        shape.render_to_svg(*center, *size, fill, &border_stroke),
                    );
                    output.add_to_layer(
                        RenderLayer::Node,
                        Box::new(self.text_element(text, *center, text_color, self.node_font_size)),
                    );
                }
            }
        }

        for group in output.render() {
            doc = doc.add(group);
        }

        doc
    }

    fn connector_path(
        &self,
        kind: RouteKind,
        points: &[Point],
        stroke: &StrokeDefinition,
    ) -> svg_element::Path {
        let path = svg_element::Path::new()
            .set("d", path_data(kind, points))
            .set("fill", "none")
            .set("marker-end", marker_end_reference(&stroke.color()));

        apply_stroke!(path, stroke)
    }

    fn text_element(
        &self,
        text: &str,
        position: Point,
        color: &Color,
        font_size: f32,
    ) -> svg_element::Text {
        svg_element::Text::new(text)
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-size", font_size)
            .set("fill", color.to_string())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_style(&StyleConfig::default()).expect("default style is valid")
    }
}

/// Estimates rendered text dimensions from character count.
///
/// Good enough for sizing a label chip; short slide labels do not justify
/// pulling in a shaping engine.
fn estimate_text_size(text: &str, font_size: f32) -> Size {
    Size::new(text.len() as f32 * font_size * 0.6, font_size * 1.2)
}

/// Builds the SVG path data string for a connector route.
///
/// Curves emit a single cubic `C` command from their two control points;
/// every other kind chains `L` segments through its points.
fn path_data(kind: RouteKind, points: &[Point]) -> String {
    match kind {
        RouteKind::Curve if points.len() == 4 => format!(
            "M {} {} C {} {}, {} {}, {} {}",
            points[0].x(),
            points[0].y(),
            points[1].x(),
            points[1].y(),
            points[2].x(),
            points[2].y(),
            points[3].x(),
            points[3].y(),
        ),
        _ => {
            let mut data = String::new();
            for (index, point) in points.iter().enumerate() {
                let command = if index == 0 { 'M' } else { 'L' };
                if index > 0 {
                    data.push(' ');
                }
                data.push_str(&format!("{command} {} {}", point.x(), point.y()));
            }
            data
        }
    }
}
